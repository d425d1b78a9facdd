//! Upload Storage
//!
//! Writes one uploaded file per request under the configured assets
//! directory and returns the stored name the owning document records as its
//! `picture_path`. Stored files are served back at `GET /assets/{name}`.
//!
//! The stored name is a generated uuid; only the sanitized extension of the
//! client-supplied filename is kept. Keying by the original filename would
//! let uploads overwrite each other (and smuggle path separators), so the
//! client name is never used as a storage key.

use std::path::Path;

use uuid::Uuid;

/// Write an uploaded payload under `assets_dir` and return the stored name.
pub async fn store_picture(
    assets_dir: &Path,
    original_name: &str,
    data: &[u8],
) -> std::io::Result<String> {
    let stored_name = generated_name(original_name);

    tokio::fs::create_dir_all(assets_dir).await?;
    tokio::fs::write(assets_dir.join(&stored_name), data).await?;

    tracing::debug!("Stored upload {original_name:?} as {stored_name}");

    Ok(stored_name)
}

/// Generated storage key: a fresh uuid plus the original extension, when
/// the extension is plain ascii-alphanumeric.
fn generated_name(original_name: &str) -> String {
    match sanitized_extension(original_name) {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}

fn sanitized_extension(original_name: &str) -> Option<String> {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_name_keeps_extension() {
        let name = generated_name("holiday photo.JPG");
        assert!(name.ends_with(".jpg"));
        assert!(Uuid::parse_str(name.trim_end_matches(".jpg")).is_ok());
    }

    #[test]
    fn test_generated_name_drops_suspect_extension() {
        assert!(!generated_name("escape.p/ng").contains('/'));
        assert!(Uuid::parse_str(&generated_name("noext")).is_ok());
    }

    #[test]
    fn test_generated_names_are_unique() {
        assert_ne!(generated_name("a.png"), generated_name("a.png"));
    }

    #[tokio::test]
    async fn test_store_picture_writes_payload() {
        let dir = tempfile::tempdir().unwrap();
        let payload = b"not really a png";

        let stored = store_picture(dir.path(), "pic.png", payload).await.unwrap();

        let on_disk = tokio::fs::read(dir.path().join(&stored)).await.unwrap();
        assert_eq!(on_disk, payload);
    }

    #[tokio::test]
    async fn test_store_picture_never_reuses_the_client_name() {
        let dir = tempfile::tempdir().unwrap();

        let first = store_picture(dir.path(), "same.png", b"one").await.unwrap();
        let second = store_picture(dir.path(), "same.png", b"two").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(tokio::fs::read(dir.path().join(&first)).await.unwrap(), b"one");
        assert_eq!(tokio::fs::read(dir.path().join(&second)).await.unwrap(), b"two");
    }
}
