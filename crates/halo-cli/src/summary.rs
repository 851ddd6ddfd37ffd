use console::Style;
use halo_core::bloom::BloomFilter;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    flag: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            flag: Style::new().green(),
        }
    }
}

pub fn print_apply_summary(filter: &BloomFilter, exposure: f64) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Bloom"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!(
        "  {:<18}{}",
        s.label.apply_to("Downsampling"),
        s.value.apply_to(filter.down_sample_ratio())
    );
    println!(
        "  {:<18}{}",
        s.label.apply_to("Blur radius"),
        s.value.apply_to(filter.blur_radius())
    );
    println!(
        "  {:<18}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(filter.threshold())
    );
    println!(
        "  {:<18}{}",
        s.label.apply_to("Exposure"),
        s.value.apply_to(exposure)
    );
    if filter.highlight_only() {
        println!("  {:<18}{}", s.label.apply_to("Mode"), s.flag.apply_to("highlight only"));
    }
    println!();
}
