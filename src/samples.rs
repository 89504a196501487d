//! Built-in sample texts offered as one-click cards.

/// A predefined example the user can load into the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleCard {
    pub title: &'static str,
    pub text: &'static str,
}

const SAMPLES: &[SampleCard] = &[
    SampleCard {
        title: "Miracle cure",
        text: "Doctors hate this one weird trick: a common kitchen spice cures diabetes in 48 hours, and big pharma is hiding it from you.",
    },
    SampleCard {
        title: "Central bank",
        text: "The central bank held its benchmark interest rate steady on Wednesday, citing easing inflation and a stable labor market.",
    },
    SampleCard {
        title: "Celebrity rumor",
        text: "Famous actor secretly replaced by body double for the past five years, insiders claim in leaked studio memo.",
    },
    SampleCard {
        title: "Space mission",
        text: "NASA confirmed the probe entered orbit around Jupiter after a five-year journey, beginning its planned science mission.",
    },
];

/// All sample cards in display order.
pub fn sample_cards() -> &'static [SampleCard] {
    SAMPLES
}

/// Look up a sample by its index in [`sample_cards`].
pub fn sample_card(index: usize) -> Option<&'static SampleCard> {
    SAMPLES.get(index)
}
