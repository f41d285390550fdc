//! Morale Lines
//!
//! Cosmetic progress messages shown while pages are enriched. Any string will
//! do; one is emitted per completed page.

use rand::Rng;

const EXCLAMATIONS: &[&str] = &[
    "Oh yeah, this is looking good.",
    "I like this a lot.",
    "Wait, let me retry that one...",
    "Eh! Not too shabby!",
    "That's way better than I had imagined it.",
    "A little tweak here...",
    "A little rewrite there...",
    "Where did I put my pen?",
    "I'm going to ask my mom what she thinks of this real quick.",
    "It seems like I'm doing all the work here.",
    "Well, that's alright I guess.",
];

/// Pick a random exclamation
pub fn random_exclamation() -> &'static str {
    let index = rand::thread_rng().gen_range(0..EXCLAMATIONS.len());
    EXCLAMATIONS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclamation_comes_from_the_list() {
        for _ in 0..50 {
            assert!(EXCLAMATIONS.contains(&random_exclamation()));
        }
    }
}
