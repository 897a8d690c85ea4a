// Criterion benchmarks for Job Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use job_match::core::{calculate_skill_match, MatchingEngine};
use job_match::models::{Candidate, Job};

const SKILL_POOL: &[&str] = &[
    "Python", "SQL", "Machine Learning", "Deep Learning", "Java", "Spring", "Docker",
    "Kubernetes", "AWS", "React", "TypeScript", "Go", "Rust", "PostgreSQL", "Spark",
];

const LOCATIONS: &[&str] = &[
    "San Francisco, CA", "New York, NY", "Austin, TX", "Seattle, WA", "Remote", "Boston, MA",
];

fn pick_skills(seed: usize, count: usize) -> Vec<&'static str> {
    (0..count).map(|i| SKILL_POOL[(seed * 7 + i * 3) % SKILL_POOL.len()]).collect()
}

fn create_candidate(id: usize) -> Candidate {
    Candidate::new(format!("C{}", id), format!("Candidate {}", id), format!("c{}@test.com", id))
        .with_skills(pick_skills(id, 3 + id % 4))
        .with_years_experience((id % 12) as u32)
        .with_education(if id % 3 == 0 { "Master's" } else { "Bachelor's" })
        .with_preferred_location(LOCATIONS[id % LOCATIONS.len()])
        .with_expected_salary(80_000 + (id % 20) as u64 * 5_000)
}

fn create_job(id: usize) -> Job {
    let salary_min = 90_000 + (id % 10) as u64 * 10_000;
    Job::new(format!("J{}", id), format!("Role {}", id), "Acme")
        .with_required_skills(pick_skills(id + 11, 2 + id % 4))
        .with_min_experience((id % 8) as u32)
        .with_location(LOCATIONS[(id + 2) % LOCATIONS.len()])
        .with_salary_range(salary_min, salary_min + 40_000)
        .with_remote(id % 5 == 0)
}

fn bench_skill_match(c: &mut Criterion) {
    let candidate = pick_skills(1, 6);
    let required = pick_skills(4, 5);

    c.bench_function("skill_match", |b| {
        b.iter(|| calculate_skill_match(black_box(candidate.as_slice()), black_box(required.as_slice())));
    });
}

fn bench_match_pair(c: &mut Criterion) {
    let engine = MatchingEngine::with_default_weights();
    let candidate = create_candidate(1);
    let job = create_job(1);

    c.bench_function("match_pair", |b| {
        b.iter(|| engine.match_pair(black_box(&candidate), black_box(&job)));
    });
}

fn bench_candidate_to_jobs(c: &mut Criterion) {
    let engine = MatchingEngine::with_default_weights();
    let candidate = create_candidate(3);

    let mut group = c.benchmark_group("candidate_to_jobs");

    for job_count in [10, 100, 1000].iter() {
        let jobs: Vec<Job> = (0..*job_count).map(create_job).collect();

        group.bench_with_input(BenchmarkId::new("match_candidate_to_jobs", job_count), job_count, |b, _| {
            b.iter(|| engine.match_candidate_to_jobs(black_box(&candidate), black_box(&jobs), Some(0.0)));
        });
    }

    group.finish();
}

fn bench_all_pairs(c: &mut Criterion) {
    let candidates: Vec<Candidate> = (0..100).map(create_candidate).collect();
    let jobs: Vec<Job> = (0..100).map(create_job).collect();

    let mut group = c.benchmark_group("all_pairs_100x100");

    for parallel in [false, true] {
        let engine = MatchingEngine::with_default_weights().with_parallel(parallel);
        let label = if parallel { "parallel" } else { "sequential" };

        group.bench_function(label, |b| {
            b.iter(|| engine.match_all_pairs(black_box(&candidates), black_box(&jobs), Some(10)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_skill_match,
    bench_match_pair,
    bench_candidate_to_jobs,
    bench_all_pairs
);

criterion_main!(benches);
