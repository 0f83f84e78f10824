use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use std::time::Duration;

use models::{Priority, Role};
use service::auth::domain::LoginInput;
use service::auth::{RosterAuthBackend, SessionConfig, SessionService};
use service::directory::{OrganizationDirectory, OrganizationFilter};
use service::storage::LocalStorage;

fn bench_filter(c: &mut Criterion) {
    let dir = OrganizationDirectory::sample();
    let filter = OrganizationFilter::new(Some(5.0), Some(Priority::MEDIUM));
    c.bench_function("directory_filter_rank", |b| {
        b.iter(|| dir.filter(&filter).len());
    });
    c.bench_function("directory_search", |b| {
        b.iter(|| dir.search("children", &OrganizationFilter::default()).len());
    });
}

fn bench_login(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let path = std::env::temp_dir().join(format!("bench_session_{}.json", uuid::Uuid::new_v4()));
    let storage = rt.block_on(LocalStorage::open(&path)).unwrap();
    let backend = Arc::new(RosterAuthBackend::builtin().unwrap());
    let svc = SessionService::new(backend, storage, SessionConfig { simulated_latency: Duration::ZERO });

    c.bench_function("session_login_verify", |b| {
        b.iter(|| {
            rt.block_on(svc.login(LoginInput {
                email: "donor@example.com".into(),
                password: "password".into(),
                role: Role::Donor,
            }))
            .unwrap()
        });
    });
    let _ = std::fs::remove_file(&path);
}

criterion_group!(benches, bench_filter, bench_login);
criterion_main!(benches);
