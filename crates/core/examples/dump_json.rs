fn main() {
    let json = rnaarc_core::draw_scene("GGGAAACCC\n3\n0 8 G C\n1 7 G C\n2 6 G C\n");
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    println!("=== MARKERS ===");
    for (i, m) in v["markers"].as_array().unwrap().iter().enumerate() {
        println!("marker[{}]: x={} fill={}", i, m["x"], m["fill"]);
    }
    println!("\n=== PAIR ARCS ===");
    for (i, a) in v["pair_arcs"].as_array().unwrap().iter().enumerate() {
        println!(
            "arc[{}]: x={} width={} height={}",
            i, a["x"], a["width"], a["height"]
        );
    }
    println!("\n=== RANGES ===");
    println!("x={:?} y={:?}", v["x_range"], v["y_range"]);
}
