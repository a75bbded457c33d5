use std::path::PathBuf;

use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "backlight",
    about = "Read or change the display backlight brightness",
    after_help = "VALUE forms:\n    \
        (none)   print current / max\n    \
        -v       same, verbose\n    \
        N        set to N\n    \
        +N, -N   change by N\n    \
        N%       set to N percent of max\n    \
        +N%, -N% change by N percent of max\n\
        Prefix any of these with -v to see what happens.",
    setting = AppSettings::AllowLeadingHyphen,
    setting = AppSettings::TrailingVarArg
)]
pub struct Opt {
    #[structopt(
        long = "device",
        default_value = "intel_backlight",
        help = "Backlight class to control"
    )]
    pub device: String,
    #[structopt(
        long = "root",
        default_value = "/sys/class/backlight",
        parse(from_os_str),
        help = "Directory holding the backlight classes"
    )]
    pub root: PathBuf,
    #[structopt(long = "debug", help = "Log device access to stderr")]
    pub debug: bool,
    #[structopt(name = "VALUE", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Opt {
        Opt::from_iter_safe(std::iter::once("backlight").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_intel_backlight() {
        let opt = parse(&[]);
        assert_eq!(opt.device, "intel_backlight");
        assert_eq!(opt.root, PathBuf::from("/sys/class/backlight"));
        assert!(!opt.debug);
        assert!(opt.args.is_empty());
    }

    #[rstest]
    #[case(&["-v"], &["-v"])]
    #[case(&["-10"], &["-10"])]
    #[case(&["-5%"], &["-5%"])]
    #[case(&["+10"], &["+10"])]
    #[case(&["-v", "-20"], &["-v", "-20"])]
    #[case(&["--device", "acpi_video0", "-v", "50%"], &["-v", "50%"])]
    fn value_arguments_pass_through(#[case] args: &[&str], #[case] expected: &[&str]) {
        assert_eq!(parse(args).args, expected);
    }

    #[test]
    fn selects_device_and_root() {
        let opt = parse(&["--root", "/tmp/fake", "--device", "amdgpu_bl0", "--debug", "+5"]);
        assert_eq!(opt.device, "amdgpu_bl0");
        assert_eq!(opt.root, PathBuf::from("/tmp/fake"));
        assert!(opt.debug);
        assert_eq!(opt.args, vec!["+5"]);
    }
}
