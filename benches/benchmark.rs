use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use prql::tokenizer::tokenize;

const EMPLOYEES_QUERY: &str = r#"from emp = employees
filter country_code == "USA"   # Each line transforms the previous result.
derive [
    gross_salary = s'salary + payroll_tax',
    gross_cost = gross_salary + benefits_cost
]
group [ title, country_code] (
    aggregate [
        average salary,
        sum_gross_cost = sum gross_cost,
        ct = count,
    ]
)
sort sum_gross_cost
filter ct > 200 | take 20
join countries side:left [country_code]"#;

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize employees query", |b| {
        b.iter(|| tokenize(black_box(EMPLOYEES_QUERY)))
    });

    let block_heavy = "derive x = ''''a''b'''c''''\n".repeat(64);
    c.bench_function("tokenize block strings", |b| {
        b.iter(|| tokenize(black_box(&block_heavy)))
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
