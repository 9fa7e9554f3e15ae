// crates/rx_deck/tests/deck_assembly.rs

//! 完整卡片组装的端到端测试：同震算例

use rx_deck::prelude::*;

fn coseismic_model() -> RelaxModel {
    let mut model = RelaxModel::new(OutputOptions {
        no_proj_output: true,
        ..OutputOptions::default()
    });
    model
        .set_grid_model(&GridModel {
            dimension: (256, 256, 256),
            spacing: (0.5, 0.5, 0.5),
            ..GridModel::default()
        })
        .unwrap();
    model.set_elastic_parameters(&ElasticParameters::new(3e4, 3e4, 8.33e-4));
    model.set_time_integration(&TimeIntegration::default());
    model.set_observation_planes(None);
    model.set_observation_points(None);
    model.set_stress_observation_segments(None);
    model.set_prestress_interfaces(0);
    model.set_linear_viscous_interfaces(None);
    model.set_nonlinear_viscous_interfaces(None);
    model.set_fault_creep_interfaces(None, None);
    model.set_inter_seismic_strike_slip(0);
    model.set_inter_seismic_tensile(0);
    model.set_coseismic_events(&CoseismicEvents::single(vec![FaultSegment::from_fields([
        1.0, 1.0, -10.0, 0.0, 0.0, 10.0, 10.0, 0.0, 90.0, 0.0,
    ])]));
    model
}

#[test]
fn coseismic_deck_has_expected_structure() {
    let mut model = coseismic_model();
    assert_eq!(model.missing_sections(), vec![SectionId::ShellHeader]);
    let script = model.render_script_with_threads("coseismic.sh", 8).unwrap();

    // 外壳在最前
    assert!(script.starts_with("#!/bin/bash coseismic\n"));
    assert!(script.contains(
        "OMP_NUM_THREADS=8 relax --no-proj-output <<EOF | tee $WDIR/in.param\n"
    ));

    // 分区按固定顺序出现
    let order = [
        "# SX1,SX2,SX3 (grid size)",
        "# lambda (MPa), mu (MPa), gamma (1/km)",
        "# time interval, (positive time step) or (negative skip, scaling)",
        "# number of observation planes",
        "# number of observation points",
        "# number of stress observation segments",
        "# number of prestress interfaces",
        "# number of linear viscous interfaces",
        "# number of nonlinear viscous interfaces",
        "# number of fault creep interfaces",
        "# number of inter-seismic strike-slip segments",
        "# number of inter-seismic tensile segments",
        "# number of coseismic events",
    ];
    let mut last = 0;
    for label in order {
        let pos = script.find(label).unwrap_or_else(|| panic!("missing {label}"));
        assert!(pos > last, "section out of order: {label}");
        last = pos;
    }

    // 网格块
    assert!(script.contains("# SX1,SX2,SX3 (grid size)\n256 256 256\n"));
    assert!(script.contains("0.5 0.5 0.5 0.2 2\n"));

    // 同震块：事件数 1，段数 1，单行两位小数，三个零计数块，EOF 收尾
    let coseismic = &script[script.find("# number of coseismic events").unwrap()..];
    let lines: Vec<&str> = coseismic.lines().collect();
    assert_eq!(lines[1], "1");
    assert_eq!(lines[2], "# number of coseismic strike-slip segments");
    assert_eq!(lines[3], "1");
    assert_eq!(lines[5], "1.00 1.00 -10.00 0.00 0.00 10.00 10.00 0.00 90.00 0.00");
    assert_eq!(lines[6], "# number of coseismic tensile segments");
    assert_eq!(lines[7], "0");
    assert_eq!(lines[8], "# number of coseismic dilatation point sources");
    assert_eq!(lines[9], "0");
    assert_eq!(lines[10], "# number of surface traction sources");
    assert_eq!(lines[11], "0");
    assert_eq!(lines[12], "EOF");
    assert!(script.ends_with("EOF\n"));
}

#[test]
fn render_is_idempotent() {
    let mut model = coseismic_model();
    let first = model.render_script_with_threads("coseismic.sh", 8).unwrap();
    let second = model.render_script_with_threads("coseismic.sh", 8).unwrap();
    assert_eq!(first, second);
}

#[test]
fn envelope_rewritten_when_filename_changes() {
    let mut model = coseismic_model();
    let first = model.render_script_with_threads("coseismic.sh", 8).unwrap();
    let second = model.render_script_with_threads("postseismic.sh", 8).unwrap();
    assert!(first.starts_with("#!/bin/bash coseismic\n"));
    assert!(second.starts_with("#!/bin/bash postseismic\n"));
    // 外壳之外的内容不受覆盖影响
    assert_eq!(
        first[first.find("# SX1").unwrap()..],
        second[second.find("# SX1").unwrap()..]
    );
}
