//! Fence definition loading and validation.
//!
//! Fences are loaded once before the alert loop starts and are immutable for
//! the process lifetime. The definition is a JSON array of fences; a bundled
//! default set is used unless a path override is configured.

use std::fs;
use std::path::Path;

use crate::error_handling::FenceError;
use crate::models::Fence;

/// The bundled default fence set.
const DEFAULT_FENCES: &str = include_str!("../../fences.json");

/// Loads and validates the fence set.
///
/// Reads from `path` when given, otherwise the embedded default definition.
///
/// # Errors
///
/// Returns a [`FenceError`] when the file cannot be read, the JSON does not
/// parse, or any fence ring is open or has fewer than four points. A bad
/// fence set aborts startup; there is no partial load.
pub fn load_fences(path: Option<&Path>) -> Result<Vec<Fence>, FenceError> {
    let raw = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| FenceError::Io {
            path: path.display().to_string(),
            source,
        })?,
        None => DEFAULT_FENCES.to_string(),
    };

    let fences: Vec<Fence> = serde_json::from_str(&raw)?;
    for fence in &fences {
        validate_ring(fence)?;
    }
    Ok(fences)
}

/// Checks ring closure and minimum size.
fn validate_ring(fence: &Fence) -> Result<(), FenceError> {
    if fence.ring.len() < 4 {
        return Err(FenceError::TooFewPoints(fence.id.clone()));
    }
    let first = fence.ring.first();
    let last = fence.ring.last();
    if first != last {
        return Err(FenceError::OpenRing(fence.id.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::LatLon;

    #[test]
    fn default_fence_set_loads_and_validates() {
        let fences = load_fences(None).expect("bundled fences are valid");
        assert!(!fences.is_empty());
        for fence in &fences {
            assert_eq!(fence.ring.first(), fence.ring.last());
            assert!(fence.ring.len() >= 4);
        }
    }

    #[test]
    fn open_ring_is_rejected() {
        let fence = Fence {
            id: "open".into(),
            name: "Open".into(),
            region: 1,
            ring: vec![
                LatLon { lat: 0.0, lon: 0.0 },
                LatLon { lat: 0.0, lon: 1.0 },
                LatLon { lat: 1.0, lon: 1.0 },
                LatLon { lat: 1.0, lon: 0.0 },
            ],
        };
        assert!(matches!(validate_ring(&fence), Err(FenceError::OpenRing(id)) if id == "open"));
    }

    #[test]
    fn tiny_ring_is_rejected() {
        let fence = Fence {
            id: "tiny".into(),
            name: "Tiny".into(),
            region: 1,
            ring: vec![
                LatLon { lat: 0.0, lon: 0.0 },
                LatLon { lat: 1.0, lon: 1.0 },
                LatLon { lat: 0.0, lon: 0.0 },
            ],
        };
        assert!(matches!(validate_ring(&fence), Err(FenceError::TooFewPoints(_))));
    }

    #[test]
    fn loads_from_an_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id":"f1","name":"F1","region":3,"ring":[
                {{"lat":0.0,"lon":0.0}},{{"lat":0.0,"lon":1.0}},
                {{"lat":1.0,"lon":1.0}},{{"lat":0.0,"lon":0.0}}]}}]"#
        )
        .expect("write");

        let fences = load_fences(Some(file.path())).expect("valid file");
        assert_eq!(fences.len(), 1);
        assert_eq!(fences[0].id, "f1");
        assert_eq!(fences[0].region, 3);
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let result = load_fences(Some(Path::new("/nonexistent/fences.json")));
        assert!(matches!(result, Err(FenceError::Io { .. })));
    }
}
