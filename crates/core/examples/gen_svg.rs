use rnaarc_core::PlotOptions;

fn main() {
    let structures = [
        ("acgu", "ACGU\n1\n0 3 A U\n"),
        ("hairpin", "GGGAAACCC\n3\n0 8 G C\n1 7 G C\n2 6 G C\n"),
        (
            "two_stems",
            "GGAAACCUUGGAAACC\n4\n0 7 G C\n1 6 G C\n8 15 U C\n9 14 G C\n",
        ),
    ];

    let opts = PlotOptions {
        dpi: 100.0,
        legend: true,
        ..PlotOptions::default()
    };

    for (name, input) in &structures {
        let svg = rnaarc_core::draw_svg(input, &opts);
        let path = format!("examples/{}.svg", name);
        std::fs::write(&path, &svg).unwrap();
        println!("wrote {} ({} bytes)", path, svg.len());
    }
}
