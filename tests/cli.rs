use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const IV: &str = "0123456789abcdef";

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("passcrypt"));
    for var in [
        "PASSCRYPT_PASSWORD",
        "PASSCRYPT_SALT",
        "PASSCRYPT_IV",
        "PASSCRYPT_ITERATIONS",
        "PASSCRYPT_KEY_SIZE",
        "PASSCRYPT_PROFILE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn salt_prints_base64_of_requested_size() {
    let salt = stdout_of(bin().arg("salt").arg("--size").arg("12"));
    // 12 bytes -> 16 base64 chars, no padding
    assert_eq!(salt.len(), 16);
}

#[test]
fn salt_of_zero_bytes_fails() {
    bin()
        .arg("salt")
        .arg("--size")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("salt size must be positive"));
}

#[test]
fn hash_and_verify_roundtrip() {
    let hash = stdout_of(bin().arg("hash").arg("hello").arg("--salt").arg("AQIDBAUGBwg="));

    bin()
        .arg("verify")
        .arg("hello")
        .arg(&hash)
        .assert()
        .success()
        .stdout(predicate::str::contains("hash verified"));

    bin()
        .arg("verify")
        .arg("hellx")
        .arg(&hash)
        .assert()
        .failure()
        .stderr(predicate::str::contains("hash does not match"));
}

#[test]
fn hash_with_explicit_algorithm() {
    let hash = stdout_of(
        bin()
            .arg("hash")
            .arg("pw")
            .arg("--algorithm")
            .arg("MD5")
            .arg("--salt-size")
            .arg("4"),
    );

    bin()
        .arg("verify")
        .arg("pw")
        .arg(&hash)
        .arg("-a")
        .arg("md5")
        .assert()
        .success();

    // same hash checked as sha256 is too short to match
    bin()
        .arg("verify")
        .arg("pw")
        .arg(&hash)
        .assert()
        .failure()
        .stderr(predicate::str::contains("hash does not match"));
}

#[test]
fn unknown_algorithm_is_rejected() {
    bin()
        .arg("hash")
        .arg("pw")
        .arg("--algorithm")
        .arg("sha3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown hash algorithm"));
}

#[test]
fn invalid_salt_is_rejected() {
    bin()
        .arg("hash")
        .arg("pw")
        .arg("--salt")
        .arg("!!!")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid base64"));
}

#[test]
fn encrypt_and_decrypt_roundtrip() {
    let dir = tempdir().unwrap();

    let ciphertext = stdout_of(
        bin()
            .current_dir(dir.path())
            .env("PASSCRYPT_PASSWORD", "pw123456")
            .arg("encrypt")
            .arg("secret")
            .arg("--salt")
            .arg("c2FsdHNhbHQ=")
            .arg("--iv")
            .arg(IV)
            .arg("--iterations")
            .arg("1000")
            .arg("--key-size")
            .arg("256"),
    );

    bin()
        .current_dir(dir.path())
        .env("PASSCRYPT_PASSWORD", "pw123456")
        .arg("decrypt")
        .arg(&ciphertext)
        .arg("--salt")
        .arg("c2FsdHNhbHQ=")
        .arg("--iv")
        .arg(IV)
        .assert()
        .success()
        .stdout("secret\n");
}

#[test]
fn password_can_be_piped() {
    let dir = tempdir().unwrap();

    let ciphertext = stdout_of(
        bin()
            .current_dir(dir.path())
            .env("PASSCRYPT_SALT", "salt")
            .env("PASSCRYPT_IV", IV)
            .arg("encrypt")
            .arg("piped")
            .write_stdin("pw123456\n"),
    );

    bin()
        .current_dir(dir.path())
        .env("PASSCRYPT_SALT", "salt")
        .env("PASSCRYPT_IV", IV)
        .arg("decrypt")
        .arg(&ciphertext)
        .write_stdin("pw123456\n")
        .assert()
        .success()
        .stdout("piped\n");
}

#[test]
fn missing_password_fails() {
    let dir = tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .arg("encrypt")
        .arg("secret")
        .arg("--salt")
        .arg("salt")
        .arg("--iv")
        .arg(IV)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No password provided"));
}

#[test]
fn short_iv_is_rejected() {
    let dir = tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .env("PASSCRYPT_PASSWORD", "pw123456")
        .arg("encrypt")
        .arg("secret")
        .arg("--salt")
        .arg("salt")
        .arg("--iv")
        .arg("0123456789")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "initializationVector parameter length must be 16",
        ));
}

#[test]
fn decrypt_with_wrong_iv_fails() {
    let dir = tempdir().unwrap();

    let ciphertext = stdout_of(
        bin()
            .current_dir(dir.path())
            .env("PASSCRYPT_PASSWORD", "pw123456")
            .arg("encrypt")
            .arg("secret")
            .arg("--salt")
            .arg("salt")
            .arg("--iv")
            .arg(IV),
    );

    bin()
        .current_dir(dir.path())
        .env("PASSCRYPT_PASSWORD", "pw123456")
        .arg("decrypt")
        .arg(&ciphertext)
        .arg("--salt")
        .arg("salt")
        .arg("--iv")
        .arg("fedcba9876543210")
        .assert()
        .failure()
        .stderr(predicate::str::contains("decryption failed"));
}

#[test]
fn profile_file_supplies_cipher_settings() {
    let dir = tempdir().unwrap();
    let profile = dir.path().join("profile.json");
    std::fs::write(
        &profile,
        r#"{"salt":"c2FsdA==","iterations":2000,"initialization_vector":"0123456789abcdef","key_size":128}"#,
    )
    .unwrap();

    let from_profile = stdout_of(
        bin()
            .current_dir(dir.path())
            .env("PASSCRYPT_PASSWORD", "pw123456")
            .arg("encrypt")
            .arg("profiled")
            .arg("--profile")
            .arg(&profile),
    );

    let from_flags = stdout_of(
        bin()
            .current_dir(dir.path())
            .env("PASSCRYPT_PASSWORD", "pw123456")
            .arg("encrypt")
            .arg("profiled")
            .arg("--salt")
            .arg("c2FsdA==")
            .arg("--iv")
            .arg(IV)
            .arg("--iterations")
            .arg("2000")
            .arg("--key-size")
            .arg("128"),
    );

    assert_eq!(from_profile, from_flags);
}

#[test]
fn flags_override_profile() {
    let dir = tempdir().unwrap();
    let profile = dir.path().join("profile.json");
    std::fs::write(
        &profile,
        r#"{"salt":"c2FsdA==","initialization_vector":"xxxxxxxxxxxxxxxx"}"#,
    )
    .unwrap();

    let ciphertext = stdout_of(
        bin()
            .current_dir(dir.path())
            .env("PASSCRYPT_PASSWORD", "pw123456")
            .arg("encrypt")
            .arg("override")
            .arg("--profile")
            .arg(&profile)
            .arg("--iv")
            .arg(IV),
    );

    bin()
        .current_dir(dir.path())
        .env("PASSCRYPT_PASSWORD", "pw123456")
        .arg("decrypt")
        .arg(&ciphertext)
        .arg("--salt")
        .arg("c2FsdA==")
        .arg("--iv")
        .arg(IV)
        .assert()
        .success()
        .stdout("override\n");
}

#[test]
fn dotenv_file_is_loaded() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        format!("PASSCRYPT_PASSWORD=pw123456\nPASSCRYPT_SALT=salt\nPASSCRYPT_IV={IV}\n"),
    )
    .unwrap();

    let ciphertext = stdout_of(
        bin()
            .current_dir(dir.path())
            .arg("encrypt")
            .arg("from dotenv"),
    );

    bin()
        .current_dir(dir.path())
        .arg("decrypt")
        .arg(&ciphertext)
        .assert()
        .success()
        .stdout("from dotenv\n");
}
