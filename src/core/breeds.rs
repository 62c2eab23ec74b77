/// Sub-score for a breed in the same taxonomy group as the preferred breed
pub const SAME_GROUP_SCORE: f64 = 85.0;

/// Sub-score for a breed pairing with no exact, matrix, or group signal
pub const NEUTRAL_BREED_SCORE: f64 = 50.0;

/// Coarse taxonomy group for a breed
///
/// Unlisted breeds map to "Mixed", which never counts as a group match:
/// two unlisted breeds fall through to the pairwise matrix or the neutral
/// default rather than scoring as group-compatible.
pub fn breed_group(breed: &str) -> &'static str {
    match breed {
        "German Shepherd" | "Rottweiler" | "Doberman" | "Boxer" | "Great Dane" => "Working",
        "Labrador Retriever" | "Golden Retriever" | "Border Collie" | "Australian Shepherd"
        | "Pointer" => "Sporting",
        "Chihuahua" | "Pomeranian" | "Yorkshire Terrier" | "Maltese" | "Toy Poodle" => "Toy",
        "Beagle" | "Basset Hound" | "Bloodhound" | "Greyhound" | "Dachshund" => "Hound",
        "Bulldog" | "Poodle" | "Dalmatian" | "Shih Tzu" | "Boston Terrier" => "Non-Sporting",
        "Pit Bull Terrier" | "Staffordshire Terrier" | "Jack Russell Terrier"
        | "West Highland White Terrier" | "Scottish Terrier" => "Terrier",
        _ => "Mixed",
    }
}

/// Sparse directional pairwise overrides keyed by (pet breed, preferred breed)
///
/// Only the listed direction is defined; a reverse lookup falls back to the
/// group/default path unless it is separately listed.
pub fn pairwise_score(pet_breed: &str, preferred: &str) -> Option<f64> {
    let value = match (pet_breed, preferred) {
        ("Labrador Retriever", "Golden Retriever") => 90.0,
        ("Labrador Retriever", "Border Collie") => 85.0,
        ("Golden Retriever", "Labrador Retriever") => 90.0,
        ("Golden Retriever", "Border Collie") => 80.0,
        ("Border Collie", "Australian Shepherd") => 95.0,
        ("Border Collie", "Labrador Retriever") => 85.0,
        ("German Shepherd", "Belgian Malinois") => 90.0,
        ("German Shepherd", "Dutch Shepherd") => 85.0,
        ("Bulldog", "Boston Terrier") => 80.0,
        ("Bulldog", "French Bulldog") => 85.0,
        ("Poodle", "Labrador Retriever") => 75.0,
        ("Poodle", "Golden Retriever") => 75.0,
        ("Chihuahua", "German Shepherd") => 30.0,
        ("Chihuahua", "Rottweiler") => 25.0,
        ("Greyhound", "Border Collie") => 45.0,
        ("Greyhound", "Australian Shepherd") => 40.0,
        _ => return None,
    };
    Some(value)
}

/// Breed sub-score for a pet against a stated breed preference
///
/// Precedence: exact match, then the pairwise matrix, then the group
/// fallback, then the neutral default. The matrix is consulted before the
/// group so that matrix entries for same-group pairs are reachable
/// (a Labrador Retriever scores 90 against a Golden Retriever preference,
/// not the group constant 85).
pub fn breed_score(pet_breed: &str, preferred: &str) -> f64 {
    if pet_breed == preferred {
        return 100.0;
    }

    if let Some(score) = pairwise_score(pet_breed, preferred) {
        return score;
    }

    let pet_group = breed_group(pet_breed);
    if pet_group != "Mixed" && pet_group == breed_group(preferred) {
        return SAME_GROUP_SCORE;
    }

    NEUTRAL_BREED_SCORE
}
