//! The fixed medication catalog.
//!
//! Six dosage variants of one medication, each mapped to the external
//! product identifier the stock endpoint expects. Supporting other
//! medications is out of scope, so the catalog lives in code.

/// A dosage variant of lisdexamfetamine capsules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medication {
    Lisdexamfetamine20mg,
    Lisdexamfetamine30mg,
    Lisdexamfetamine40mg,
    Lisdexamfetamine50mg,
    Lisdexamfetamine60mg,
    Lisdexamfetamine70mg,
}

impl Medication {
    pub const ALL: [Medication; 6] = [
        Medication::Lisdexamfetamine20mg,
        Medication::Lisdexamfetamine30mg,
        Medication::Lisdexamfetamine40mg,
        Medication::Lisdexamfetamine50mg,
        Medication::Lisdexamfetamine60mg,
        Medication::Lisdexamfetamine70mg,
    ];

    /// The external product identifier sent in stock lookups.
    #[must_use]
    pub fn product_id(self) -> &'static str {
        match self {
            Medication::Lisdexamfetamine20mg => "42013311000001109",
            Medication::Lisdexamfetamine30mg => "42013411000001102",
            Medication::Lisdexamfetamine40mg => "42013511000001103",
            Medication::Lisdexamfetamine50mg => "42013611000001104",
            Medication::Lisdexamfetamine60mg => "42013711000001108",
            Medication::Lisdexamfetamine70mg => "42013811000001100",
        }
    }

    /// Human-readable name shown in the CLI.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Medication::Lisdexamfetamine20mg => "Lisdexamfetamine 20mg capsules",
            Medication::Lisdexamfetamine30mg => "Lisdexamfetamine 30mg capsules",
            Medication::Lisdexamfetamine40mg => "Lisdexamfetamine 40mg capsules",
            Medication::Lisdexamfetamine50mg => "Lisdexamfetamine 50mg capsules",
            Medication::Lisdexamfetamine60mg => "Lisdexamfetamine 60mg capsules",
            Medication::Lisdexamfetamine70mg => "Lisdexamfetamine 70mg capsules",
        }
    }
}
