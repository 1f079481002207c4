/*!
# Standard Operators

Every operator here is installed through [`Engine::register`], the same
way a host program adds its own. Operators check their operands before
consuming them so a failure leaves the stack untouched.

Control operators that run a body of fields can only promise that for
their own operands. Whatever the body did before failing stays done.

*/

use crate::mach::Engine;

mod control;
mod logic;
mod math;
mod stack;
mod system;
mod text;

/// Install every standard operator into `engine`.
pub fn install(engine: &mut Engine) {
    math::install(engine);
    logic::install(engine);
    stack::install(engine);
    text::install(engine);
    control::install(engine);
    system::install(engine);
    tracing::debug!(operators = engine.registry().len(), "installed standard operators");
}
