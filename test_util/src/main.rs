use pipeline_common::logger::init_logger;
use test_util::helper::load_env;

pub struct IntegrationTest {
    pub name: &'static str,
    pub test_fn: fn(),
}

inventory::collect!(IntegrationTest);

fn setup() {
    load_env();
    println!("Setup: {}", init_logger("integration"));
}

fn teardown() {
    println!("Teardown")
}

fn main() {
    setup();

    // Run the tests
    for t in inventory::iter::<IntegrationTest> {
        println!("Running {}", t.name);
        (t.test_fn)()
    }

    teardown();
}
