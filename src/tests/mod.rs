
#[cfg(test)]
mod demo_tests;

#[cfg(test)]
mod logging_tests;
