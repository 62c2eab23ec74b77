// Criterion benchmarks for PawMart Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pawmart_algo::core::{
    breeds::breed_score, calculate_compatibility_score, match_insights, Matcher,
};
use pawmart_algo::models::{AgeRange, Pet, ScoringWeights, UserPreferences};

fn create_candidate(id: usize) -> Pet {
    let species = if id % 4 == 0 { "Cat" } else { "Dog" };
    let breeds = [
        "Labrador Retriever",
        "Golden Retriever",
        "Beagle",
        "German Shepherd",
        "Poodle",
        "Chihuahua",
    ];
    let sizes = ["Small", "Medium", "Large"];
    let energies = ["Low", "Moderate", "High"];
    let training = ["Easy", "Moderate", "Difficult"];

    Pet {
        pet_id: id.to_string(),
        name: format!("Pet {}", id),
        species: species.to_string(),
        breed: breeds[id % breeds.len()].to_string(),
        age: (id % 15) as f64,
        size: sizes[id % sizes.len()].to_string(),
        energy: energies[id % energies.len()].to_string(),
        training_level: training[id % training.len()].to_string(),
        family_friendly: id % 2 == 0,
        good_with_kids: id % 3 != 0,
        good_with_pets: id % 5 != 0,
        vaccinated: true,
        medical_history: vec![],
        special_needs: false,
        image_file_ids: vec![],
        description: None,
    }
}

fn create_preferences() -> UserPreferences {
    UserPreferences {
        species: Some("Dog".to_string()),
        breed: Some("Labrador Retriever".to_string()),
        age_range: Some(AgeRange { min: 1.0, max: 5.0 }),
        size: Some("Medium".to_string()),
        energy: Some("Moderate".to_string()),
        training: Some("Easy".to_string()),
        family_friendly: true,
        good_with_kids: true,
        good_with_pets: false,
        lifestyle: None,
    }
}

fn bench_breed_score(c: &mut Criterion) {
    c.bench_function("breed_score", |b| {
        b.iter(|| {
            breed_score(
                black_box("Labrador Retriever"),
                black_box("Golden Retriever"),
            )
        });
    });
}

fn bench_single_score(c: &mut Criterion) {
    let pet = create_candidate(1);
    let preferences = create_preferences();
    let weights = ScoringWeights::default();

    c.bench_function("calculate_compatibility_score", |b| {
        b.iter(|| {
            calculate_compatibility_score(black_box(&pet), black_box(&preferences), black_box(&weights))
        });
    });
}

fn bench_match_insights(c: &mut Criterion) {
    let pet = create_candidate(1);
    let preferences = create_preferences();
    let weights = ScoringWeights::default();

    c.bench_function("match_insights", |b| {
        b.iter(|| match_insights(black_box(&pet), black_box(&preferences), black_box(&weights)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Pet> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_pets", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.rank_pets(black_box(&preferences), black_box(candidates.clone()))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_breed_score,
    bench_single_score,
    bench_match_insights,
    bench_ranking
);

criterion_main!(benches);
