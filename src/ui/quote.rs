//! Quote of the day

use rand::Rng;

/// An inspirational quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub quote: &'static str,
    pub author: &'static str,
}

pub static QUOTES: [Quote; 4] = [
    Quote {
        quote: "Be yourself; everyone else is already taken.",
        author: "Oscar Wilde",
    },
    Quote {
        quote: "So many books, so little time.",
        author: "Frank Zappa",
    },
    Quote {
        quote: "Be the change that you wish to see in the world.",
        author: "Mahatma Gandhi",
    },
    Quote {
        quote: "Without music, life would be a mistake.",
        author: "Friedrich Nietzsche",
    },
];

/// Pick a quote uniformly at random
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static Quote {
    &QUOTES[rng.random_range(0..QUOTES.len())]
}

/// Write a random quote and its author into the page
#[cfg(target_arch = "wasm32")]
pub fn mount<R: Rng + ?Sized>(document: &web_sys::Document, config: &crate::DashConfig, rng: &mut R) {
    use super::dom;

    let todays = pick(rng);
    match (
        dom::query(document, &config.quote_text),
        dom::query(document, &config.quote_author),
    ) {
        (Some(text), Some(author)) => {
            text.set_text_content(Some(todays.quote));
            author.set_text_content(Some(todays.author));
        }
        _ => log::warn!("Quote elements not found, skipping quote"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pick_covers_all_quotes() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut seen = vec![false; QUOTES.len()];
        for _ in 0..200 {
            let q = pick(&mut rng);
            let idx = QUOTES.iter().position(|c| c == q).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_pick_is_deterministic_per_seed() {
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(pick(&mut a), pick(&mut b));
        }
    }
}
