use matroid::Matroid;
use matroid_core::{Element, ErrorInfo, Family, MatroidError, Payload, Set};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct SerializableMatroid<T> {
    ground_set: Vec<T>,
    rank: usize,
    bases: Vec<Vec<T>>,
}

impl<T: Element> SerializableMatroid<T> {
    fn capture(matroid: &Matroid<T>) -> Self {
        Self {
            ground_set: matroid.ground_set().iter().cloned().collect(),
            rank: matroid.rank(),
            bases: matroid
                .bases()
                .iter()
                .map(|basis| basis.iter().cloned().collect())
                .collect(),
        }
    }

    fn restore(self) -> Result<Matroid<T>, MatroidError> {
        let ground: Set<T> = self.ground_set.into_iter().collect();
        let bases: Family<T> = self
            .bases
            .into_iter()
            .map(|basis| basis.into_iter().collect())
            .collect();
        let matroid = Matroid::new(ground, Payload::Bases(bases))?;
        if matroid.rank() != self.rank {
            let info = ErrorInfo::new("rank-mismatch", "stored rank disagrees with the bases")
                .with_context("stored", self.rank.to_string())
                .with_context("derived", matroid.rank().to_string());
            return Err(MatroidError::FormatViolation(info));
        }
        Ok(matroid)
    }
}

/// Serializes a matroid to a JSON string.
pub fn to_json<T: Element + Serialize>(matroid: &Matroid<T>) -> Result<String, MatroidError> {
    serde_json::to_string_pretty(&SerializableMatroid::capture(matroid))
        .map_err(|err| MatroidError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a matroid from a JSON string, revalidating its bases.
pub fn from_json<T: Element + DeserializeOwned>(data: &str) -> Result<Matroid<T>, MatroidError> {
    let payload: SerializableMatroid<T> = serde_json::from_str(data)
        .map_err(|err| MatroidError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    payload.restore()
}

/// Serializes a matroid into a binary blob.
pub fn to_bytes<T: Element + Serialize>(matroid: &Matroid<T>) -> Result<Vec<u8>, MatroidError> {
    bincode::serialize(&SerializableMatroid::capture(matroid))
        .map_err(|err| MatroidError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates a matroid from a binary blob, revalidating its bases.
pub fn from_bytes<T: Element + DeserializeOwned>(bytes: &[u8]) -> Result<Matroid<T>, MatroidError> {
    let payload: SerializableMatroid<T> = bincode::deserialize(bytes)
        .map_err(|err| MatroidError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))?;
    payload.restore()
}
