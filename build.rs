use chrono::Utc;

fn main() {
	println!("cargo:rustc-env=BUILD_DATE={}", Utc::now().format("%Y-%m-%d"));
}
