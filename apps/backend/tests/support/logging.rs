//! Logging for integration test binaries. Set `TEST_LOG=debug` to see turn
//! transitions.

#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    backend_test_support::logging::init();
}
