//! Random gradient background

use rand::Rng;

/// Palette the gradient endpoints are drawn from
pub static COLORS: [&str; 18] = [
    "#ef5777", "#575fcf", "#4bcffa", "#34e7e4", "#0be881", "#f53b57", "#3c40c6", "#0fbcf9",
    "#00d8d6", "#05c46b", "#ffc048", "#ffdd59", "#ff5e57", "#d2dae2", "#485460", "#ffa801",
    "#ffd32a", "#ff3f34",
];

/// A two-color linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    /// Degrees, 0..360
    pub angle: u16,
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    /// Random angle and two different palette colors
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first = rng.random_range(0..COLORS.len());
        // Draw from the remaining colors by skipping over `first`
        let mut second = rng.random_range(0..COLORS.len() - 1);
        if second >= first {
            second += 1;
        }

        Self {
            angle: rng.random_range(0..360),
            from: COLORS[first],
            to: COLORS[second],
        }
    }

    /// CSS `background` value
    pub fn css(&self) -> String {
        format!("linear-gradient({}deg, {}, {})", self.angle, self.from, self.to)
    }
}

/// Paint a random gradient on the page container
#[cfg(target_arch = "wasm32")]
pub fn mount<R: Rng + ?Sized>(document: &web_sys::Document, config: &crate::DashConfig, rng: &mut R) {
    use wasm_bindgen::JsCast;

    let Some(container) = super::dom::query(document, &config.container)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::warn!("Container '{}' not found, skipping background", config.container);
        return;
    };

    let gradient = Gradient::random(rng);
    if let Err(e) = container.style().set_property("background", &gradient.css()) {
        log::warn!("Failed to set background: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_colors_never_repeat() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let g = Gradient::random(&mut rng);
            assert_ne!(g.from, g.to);
            assert!(g.angle < 360);
        }
    }

    #[test]
    fn test_palette_is_distinct() {
        for (i, a) in COLORS.iter().enumerate() {
            assert!(COLORS[i + 1..].iter().all(|b| a != b), "{a} repeated");
        }
    }

    #[test]
    fn test_css() {
        let g = Gradient {
            angle: 45,
            from: "#ef5777",
            to: "#575fcf",
        };
        assert_eq!(g.css(), "linear-gradient(45deg, #ef5777, #575fcf)");
    }
}
