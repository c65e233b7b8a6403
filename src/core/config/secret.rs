use std::io::Write;
use std::{fs, path::Path, path::PathBuf};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

use super::parsing::env_optional;

const SECRET_FILE_ENV: &str = "REVIEW_QUEUE_SECRET_FILE";

/// Signing key used when `SECRET_KEY` is unset: read from the secret file, or generated and
/// persisted there on first start so tokens survive restarts.
pub(super) fn load_or_create_secret_key() -> String {
    let path = secret_file_path();

    if let Some(existing) = read_secret(&path) {
        return existing;
    }

    let new_key = generate_secret_key();
    match persist_secret(&path, &new_key) {
        Ok(()) => new_key,
        // Another process won the race; use its key.
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            read_secret(&path).unwrap_or(new_key)
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                path = %path.display(),
                "Failed to persist generated secret key; tokens will not survive a restart"
            );
            new_key
        }
    }
}

fn read_secret(path: &Path) -> Option<String> {
    let value = fs::read_to_string(path).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn persist_secret(path: &Path, key: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::OpenOptions::new().write(true).create_new(true).open(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(key.as_bytes())
}

fn generate_secret_key() -> String {
    let mut bytes = [0u8; 64];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

fn secret_file_path() -> PathBuf {
    env_optional(SECRET_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".secret_key"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_key_is_persisted_and_reused() {
        let path = std::env::temp_dir()
            .join(format!("review-queue-secret-{}", std::process::id()))
            .join("key");
        let _ = fs::remove_file(&path);

        let key = generate_secret_key();
        persist_secret(&path, &key).expect("persist");
        assert_eq!(read_secret(&path).as_deref(), Some(key.as_str()));

        let second = persist_secret(&path, "other").expect_err("file exists");
        assert_eq!(second.kind(), std::io::ErrorKind::AlreadyExists);
        assert_eq!(read_secret(&path).as_deref(), Some(key.as_str()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn generated_keys_are_distinct() {
        assert_ne!(generate_secret_key(), generate_secret_key());
    }
}
