/// Display version information
pub fn execute() {
    println!("proxyvote {}", env!("CARGO_PKG_VERSION"));
    println!("Shareholder vote processing with record-date cutoff");
}
