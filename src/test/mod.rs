pub(crate) mod usecase;
pub(crate) mod vectors;

use ctor::ctor;

#[ctor]
fn logs() {
    env_logger::init();
}
