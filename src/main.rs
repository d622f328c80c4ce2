use colored::Colorize;
use report::{Line, COMPLEX_HEADER, FRACTION_HEADER};

mod complex;
mod error;
mod fraction;
mod report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();
  let report = match report::demo() {
    Ok(report) => report,
    Err(err) => {
      log::error!("Sample computations failed: {err}");
      return Err(err.into());
    }
  };
  log::debug!("Printing report:\n{report}");
  println!("{}", FRACTION_HEADER.bold());
  print_lines(&report.fractions);
  println!("\n{}", COMPLEX_HEADER.bold());
  print_lines(&report.complexes);
  Ok(())
}

fn print_lines(lines: &[Line]) {
  for line in lines {
    let result = line.result.bold();
    println!("{} = {result}", line.expression);
  }
}
