use rand::{seq::SliceRandom, Rng};
use tracing::debug;

const TAGS: [&str; 2] = ["$bcrypt$2b$12$", "$argon2id$v=19$m=65536,t=3,p=2$"];
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 12;

/// Turns a raw password into the opaque string stored on a user.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, raw: &str) -> String;
}

/// Placeholder hasher: a random algorithm tag followed by random base-36
/// characters. The raw password does not influence the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedHasher;

impl SimulatedHasher {
    fn token<R: Rng>(rng: &mut R) -> String {
        let tag = TAGS.choose(rng).copied().unwrap_or(TAGS[0]);
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        format!("{tag}{suffix}")
    }
}

impl PasswordHasher for SimulatedHasher {
    fn hash(&self, raw: &str) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let hash = Self::token(&mut rng);
            if hash != raw {
                debug!(len = hash.len(), "password hashed");
                return hash;
            }
        }
    }
}
