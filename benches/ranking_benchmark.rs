use criterion::{black_box, criterion_group, criterion_main, Criterion};
use steam_recommender::{
    ranking::{OverlapScorer, ScorerKind},
    AttributeSet, Filters, GameDataset, GameRecord, RecommendQuery, Recommender,
};

fn create_test_dataset(count: usize) -> GameDataset {
    GameDataset::from_records((0..count).map(|i| {
        let mut game = GameRecord::new(format!("Test Game {}", i));
        game.category = format!("Category {}", i % 3);
        game.genre = format!("Genre {};Genre {}", i % 7, i % 5);
        game.tag = format!("Tag {}", i % 11);
        game.developer = format!("Developer {}", i % 10);
        game.price = (i % 60) as f64;
        game.positive_ratings = (i * 37 % 1000) as u64;
        game.negative_ratings = (i * 13 % 400) as u64;
        game
    }))
}

fn bench_match_count(c: &mut Criterion) {
    let recommender_1k = Recommender::new(create_test_dataset(1_000));
    let recommender_27k = Recommender::new(create_test_dataset(27_000));
    let query = RecommendQuery::new("Test Game 42", AttributeSet::all())
        .with_filters(Filters::new().with_max_price(30.0).with_min_rating(50.0))
        .with_limit(10);

    c.bench_function("match_count_recommend_1k", |b| {
        b.iter(|| black_box(recommender_1k.recommend(&query).unwrap()));
    });

    c.bench_function("match_count_recommend_27k", |b| {
        b.iter(|| black_box(recommender_27k.recommend(&query).unwrap()));
    });
}

fn bench_overlap(c: &mut Criterion) {
    let recommender = Recommender::with_scorer(create_test_dataset(1_000), Box::new(OverlapScorer::new()));
    let query = RecommendQuery::new("Test Game 42", AttributeSet::all()).with_limit(10);

    c.bench_function("overlap_recommend_1k", |b| {
        b.iter(|| black_box(recommender.recommend(&query).unwrap()));
    });
}

fn bench_multiple_references(c: &mut Criterion) {
    let recommender = Recommender::with_scorer(create_test_dataset(1_000), ScorerKind::MatchCount.build());
    let query = RecommendQuery::new("Test Game 1", AttributeSet::parse("genre,developer").unwrap())
        .with_reference("Test Game 2")
        .with_reference("Test Game 3")
        .with_limit(10);

    c.bench_function("match_count_recommend_3_references", |b| {
        b.iter(|| black_box(recommender.recommend(&query).unwrap()));
    });
}

criterion_group!(benches, bench_match_count, bench_overlap, bench_multiple_references);
criterion_main!(benches);
