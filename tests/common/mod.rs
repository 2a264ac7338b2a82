use assert_cmd::Command;

pub fn filetimegen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("filetimegen").unwrap();
    cmd.env_remove("FILETIMEGEN_LOG");
    cmd
}

/// Join names with newlines, the way `--newline` input looks
#[allow(dead_code)]
pub fn newline_input(names: &[&str]) -> String {
    names.iter().map(|n| format!("{}\n", n)).collect()
}
