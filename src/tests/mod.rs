//! Behaviour shared by every shape, exercised on a representative few.

mod display;
mod equality;
