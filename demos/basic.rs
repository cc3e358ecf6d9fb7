use std::collections::HashMap;

use mimicry::builder::HeaderBuilder;
use mimicry::options::HeaderOpts;

fn main() {
    let builder = HeaderBuilder::new(&HashMap::from([(
        String::from("X-API-Key"),
        String::from("deadbeef"),
    )]));

    builder.set_basic_header("X-API-Version", "2");

    let headers = builder.build(&HeaderOpts::browser().with_referer("https://example.com/"));

    for (name, value) in &headers {
        println!("{}: {}", name, value);
    }
}
