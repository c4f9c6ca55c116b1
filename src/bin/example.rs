//! Example - portal frame built through the library API

use frame2d::prelude::*;

fn main() {
    env_logger::init();

    println!("=== frame2d example: portal frame ===\n");

    let mut model = Model::new();

    model.add_material(Material::steel(1)).expect("add material");

    // IPE300-like section: A = 5.38e-3 m^2, I = 8.36e-5 m^4
    model
        .add_section(Section::new(1, "IPE300", 5.38e-3, 8.36e-5))
        .expect("add section");

    // A simple portal frame
    //
    //     3 -------- 4
    //     |          |
    //     |          |
    //     1          2
    //     ^          ^
    //   fixed      fixed
    //
    let height = 4.0;
    let span = 6.0;

    model.add_node(Node::new(1, 0.0, 0.0)).unwrap();
    model.add_node(Node::new(2, span, 0.0)).unwrap();
    model.add_node(Node::new(3, 0.0, height)).unwrap();
    model.add_node(Node::new(4, span, height)).unwrap();

    model.add_member(Member::frame(1, 1, 3, 1, 1)).unwrap();
    model.add_member(Member::frame(2, 2, 4, 1, 1)).unwrap();
    model.add_member(Member::frame(3, 3, 4, 1, 1)).unwrap();

    model.add_support(Support::fixed(1)).unwrap();
    model.add_support(Support::fixed(2)).unwrap();

    // 20 kN/m downward on the beam, 10 kN lateral at roof level
    model
        .add_member_load(DistributedLoad::uniform_downward(3, 20_000.0))
        .unwrap();
    model.add_node_load(NodeLoad::fx(3, 10_000.0)).unwrap();

    println!("Running linear analysis...\n");
    model.analyze_linear().expect("analysis failed");

    let stdout = std::io::stdout();
    frame2d::report::write_text(&model, &mut stdout.lock()).expect("report failed");

    let sway = model.node_displacement(3).unwrap();
    println!("\nRoof sway: {:.3} mm", sway.dx * 1000.0);
}
