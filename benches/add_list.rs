use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contact_manager::prelude::ContactManager;

// In-memory manager prepopulated with `n` contacts.
fn make_manager_with_n(n: usize) -> ContactManager {
    let mut manager = ContactManager::new();
    for i in 0..n {
        let phone = format!("05{i:08}");
        manager
            .add_contact(Some("User"), Some(&format!("No{i}")), Some(&phone))
            .expect("valid contact");
    }
    manager
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("Adding one contact to 5k", |b| {
        b.iter_batched(
            || make_manager_with_n(5_000),
            |mut manager| {
                manager
                    .add_contact(Some("Zoe"), Some("Doe"), Some("0558887777"))
                    .expect("valid contact");
                black_box(manager.len());
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("Rejecting contact with missing phone", |b| {
        let mut manager = ContactManager::new();
        b.iter(|| black_box(manager.add_contact(Some("Zoe"), Some("Doe"), None).is_err()));
    });
}

fn bench_list(c: &mut Criterion) {
    let manager = make_manager_with_n(5_000);

    c.bench_function("Listing 5k contacts", |b| {
        b.iter(|| {
            let count = manager
                .get_all_contacts()
                .iter()
                .filter(|c| c.first_name() == "User")
                .count();
            black_box(count);
        });
    });
}

criterion_group!(benches, bench_add, bench_list);
criterion_main!(benches);
