mod session;
mod system;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
