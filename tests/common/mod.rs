pub mod fake_clock;
