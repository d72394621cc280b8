//! Password hashing and verification with Argon2id.
//!
//! Hashes are PHC strings (algorithm, parameters and salt included) and are
//! stored as-is in `users.password_hash`.
//!
//! The async entry points run Argon2 on the blocking pool. Logins for unknown
//! accounts still verify against a dummy hash, so both failure paths cost one
//! Argon2 verification.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Error as ArgonError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::errors::AppError;

/// Memory cost in KiB (OWASP minimum for Argon2id).
const MEMORY_COST_KIB: u32 = 19_456;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

const DUMMY_PASSWORD: &str = "careerpath-unknown-account";

#[derive(Clone)]
pub struct PasswordService {
    argon2: Argon2<'static>,
    /// Hash of `DUMMY_PASSWORD` with the same parameters as real hashes.
    dummy_hash: Arc<str>,
    verifications: Arc<AtomicU64>,
}

impl PasswordService {
    pub fn new() -> Result<Self, AppError> {
        let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Invalid Argon2 parameters: {e}"))
        })?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let dummy_hash = hash_with(&argon2, DUMMY_PASSWORD)?;

        Ok(Self {
            argon2,
            dummy_hash: Arc::from(dummy_hash),
            verifications: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Number of Argon2 verifications run so far, dummy ones included.
    pub fn verifications(&self) -> u64 {
        self.verifications.load(Ordering::Relaxed)
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_with(&self.argon2, password)
    }

    /// `Ok(false)` for a wrong password; `Err` only when the stored hash is unusable.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| {
            tracing::warn!("Stored password hash is malformed: {e}");
            AppError::Internal(anyhow::anyhow!("Invalid password hash format"))
        })?;

        self.verifications.fetch_add(1, Ordering::Relaxed);
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(ArgonError::Password) => Ok(false),
            Err(e) => Err(AppError::Internal(anyhow::anyhow!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Burns one verification against the dummy hash. Always `false`.
    pub fn verify_dummy(&self, password: &str) -> bool {
        let _ = self.verify(password, &self.dummy_hash);
        false
    }

    /// `hash` on the blocking pool.
    pub async fn hash_blocking(&self, password: String) -> Result<String, AppError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in hashing: {e}")))?
    }

    /// Checks `password` against the account's hash, or against the dummy hash
    /// when there is no account, on the blocking pool.
    pub async fn check_blocking(
        &self,
        password: String,
        stored_hash: Option<String>,
    ) -> Result<bool, AppError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => service.verify(&password, &hash),
            None => Ok(service.verify_dummy(&password)),
        })
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in verification: {e}"))
        })?
    }
}

fn hash_with(argon2: &Argon2<'_>, password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))?;
    Ok(hash.to_string())
}
