use criterion::criterion_main;


criterion_main!(capture::capture_benches, ops::ops_benches);
