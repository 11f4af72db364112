//! Round trip against keys freshly generated by `ssh-keygen`.
//!
//! Set `SSH_KEYGEN` to point at a specific binary. The test passes without
//! checking anything when no generator is available.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use openssh::{OpenSshPrivateKey, OpenSshPublicKey};
use tracing::{info, warn};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn keygen() -> String {
    env::var("SSH_KEYGEN").unwrap_or_else(|_| "ssh-keygen".to_owned())
}

/// Runs `ssh-keygen` with `args`, returning `None` when it cannot be used.
fn run_keygen(args: &[&str], key_path: &Path) -> Option<String> {
    let program = keygen();
    let output = Command::new(&program)
        .args(args)
        .arg(key_path)
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            warn!(
                %program,
                stderr = %String::from_utf8_lossy(&output.stderr),
                "ssh-keygen failed, ed25519 is probably unsupported; skipping"
            );
            None
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(%program, "ssh-keygen is not installed; skipping");
            None
        }
        Err(err) => panic!("failed to run {program}: {err}"),
    }
}

#[test]
fn test_parse_generated_key() {
    init_tracing();

    let dir = tempfile::tempdir().expect("tempdir");
    let key_path = dir.path().join("id_ed25519");
    let pub_path = dir.path().join("id_ed25519.pub");

    let generated = run_keygen(
        &["-q", "-t", "ed25519", "-N", "", "-C", "interop@test", "-f"],
        &key_path,
    );
    if generated.is_none() {
        return;
    }

    let public_text = fs::read_to_string(&pub_path).expect("read public key");
    let private_text = fs::read_to_string(&key_path).expect("read private key");

    let public = OpenSshPublicKey::from_line(&public_text).expect("parse public key");
    assert_eq!(public.comment(), Some("interop@test"));

    let private = OpenSshPrivateKey::from_pem(&private_text).expect("parse private key");
    assert!(!private.is_encrypted());
    assert_eq!(private.public_key().blob(), public.blob());
    assert_eq!(private.keypair().expect("plain").comment(), "interop@test");
    private.check_derivation().expect("derivation");

    let msg = b"interop";
    let sig = private.signing_key().expect("signing key").sign(msg).expect("sign");
    public
        .verifying_key()
        .expect("verifying key")
        .verify(msg, &sig)
        .expect("verify");

    // `ssh-keygen -l` prints "<bits> <fingerprint> <comment> (ED25519)"
    if let Some(listing) = run_keygen(&["-l", "-E", "sha256", "-f"], &pub_path) {
        let printed = listing.split_whitespace().nth(1).expect("fingerprint field");
        assert_eq!(printed, public.fingerprint());
    }
}
