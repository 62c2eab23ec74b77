use serde::{Deserialize, Serialize};

/// Candidate pet listing with the attributes the matcher scores against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    #[serde(rename = "petId")]
    pub pet_id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: f64,
    pub size: String,
    pub energy: String,
    #[serde(rename = "trainingLevel")]
    pub training_level: String,
    #[serde(rename = "familyFriendly", default)]
    pub family_friendly: bool,
    #[serde(rename = "goodWithKids", default)]
    pub good_with_kids: bool,
    #[serde(rename = "goodWithPets", default)]
    pub good_with_pets: bool,
    #[serde(default)]
    pub vaccinated: bool,
    #[serde(rename = "medicalHistory", default)]
    pub medical_history: Vec<String>,
    #[serde(rename = "specialNeeds", default)]
    pub special_needs: bool,
    #[serde(rename = "imageFileIds", default)]
    pub image_file_ids: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Pet {
    /// Age with the clamping policy applied: non-finite or negative ages
    /// count as 0 years rather than propagating NaN through the scorer.
    pub fn clamped_age(&self) -> f64 {
        if self.age.is_finite() && self.age > 0.0 {
            self.age
        } else {
            0.0
        }
    }
}

/// Inclusive age window in years
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: f64,
    pub max: f64,
}

impl AgeRange {
    /// Bounds with the clamping policy applied: non-finite endpoints count
    /// as 0 and an inverted window is swapped into order.
    pub fn normalized(self) -> (f64, f64) {
        let min = if self.min.is_finite() { self.min } else { 0.0 };
        let max = if self.max.is_finite() { self.max } else { 0.0 };
        if min <= max {
            (min, max)
        } else {
            (max, min)
        }
    }
}

/// Adopter matching preferences
///
/// String preferences left out, empty, or set to "Any" mean no preference;
/// boolean preferences set to true mark the trait as required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(rename = "ageRange", default)]
    pub age_range: Option<AgeRange>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub energy: Option<String>,
    #[serde(default)]
    pub training: Option<String>,
    #[serde(rename = "familyFriendly", default)]
    pub family_friendly: bool,
    #[serde(rename = "goodWithKids", default)]
    pub good_with_kids: bool,
    #[serde(rename = "goodWithPets", default)]
    pub good_with_pets: bool,
    #[serde(default)]
    pub lifestyle: Option<Lifestyle>,
}

/// Household lifestyle descriptors used by the multiplicative model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lifestyle {
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub space: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

/// Health constraints for composite scoring; each flag marks a requirement
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HealthRequirements {
    #[serde(default)]
    pub vaccinated: bool,
    #[serde(rename = "noMedicalHistory", default)]
    pub no_medical_history: bool,
    #[serde(rename = "noSpecialNeeds", default)]
    pub no_special_needs: bool,
}

/// Per-candidate match explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInsights {
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    pub insight: String,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Ranked match result row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetMatch {
    #[serde(rename = "petId")]
    pub pet_id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: f64,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    pub insight: String,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(rename = "imageFileIds")]
    pub image_file_ids: Vec<String>,
    pub description: Option<String>,
}

/// Attribute weights for the weighted-average score
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub species: f64,
    pub breed: f64,
    pub age: f64,
    pub size: f64,
    pub energy: f64,
    pub training: f64,
    pub family_friendly: f64,
    pub good_with_kids: f64,
    pub good_with_pets: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.species
            + self.breed
            + self.age
            + self.size
            + self.energy
            + self.training
            + self.family_friendly
            + self.good_with_kids
            + self.good_with_pets
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            species: 0.25,
            breed: 0.20,
            age: 0.15,
            size: 0.12,
            energy: 0.10,
            training: 0.08,
            family_friendly: 0.05,
            good_with_kids: 0.03,
            good_with_pets: 0.02,
        }
    }
}
