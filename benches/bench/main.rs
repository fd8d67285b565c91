// third-party imports
use criterion::criterion_main;

const GROUP: &str = "globfold";
const ND: &str = ":"; // name delimiter

mod batch;
mod wildcard;

criterion_main!(wildcard::benches, batch::benches);
