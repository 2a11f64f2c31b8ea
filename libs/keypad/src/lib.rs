//! Client-side calculator state machine.
//!
//! [`Keypad`] tracks what a calculator front-end shows: the display string,
//! the pending operation with its snapshotted first operand, and an optional
//! error message. Every key press is a synchronous state update except
//! Equals, which performs one call through a [`CalculatorApi`] and renders
//! the outcome.
//!
//! The keypad owns no transport; front-ends inject any `CalculatorApi`
//! implementation (the HTTP client in production, mocks in tests).
//!
//! [`CalculatorApi`]: calculator_sdk::CalculatorApi

mod keypad;

pub use keypad::Keypad;
