use super::*;
use crate::complex::FlagComplex;
use crate::error::FlagError;
use crate::rand::conic_complex;
use crate::tessellate::{HullTessellator, Tessellator};
use nalgebra::vector;

fn cfg(range: u32) -> AnimationCfg {
    AnimationCfg {
        range: TrafoRange {
            trafo_range: range,
            t_step: 0.01,
        },
        ..AnimationCfg::default()
    }
}

fn quad() -> FlagComplex {
    conic_complex(&[0.3, 1.9, 3.4, 4.9]).unwrap()
}

#[test]
fn eruption_yields_one_frame_per_key() {
    let mut fc = conic_complex(&[0.0, 2.1, 4.2]).unwrap();
    let frames = animate(&mut fc, Trafo::Erupt, &cfg(100), None).unwrap();
    assert_eq!(frames.len(), 201);
    assert_eq!(frames.keys().next(), Some(&-100));
    assert_eq!(frames.keys().last(), Some(&100));
    for frame in frames.values() {
        assert_eq!(frame.ps.len(), 3);
        assert_eq!(frame.qs.len(), 3);
        assert_eq!(frame.us.len(), 1);
        assert_eq!(frame.us[0].len(), 3);
        assert!(frame.convex.is_none());
    }
}

#[test]
fn key_zero_is_the_undeformed_complex() {
    let base = conic_complex(&[0.0, 2.1, 4.2]).unwrap();
    let mut drawn = base.clone();
    drawn.draw_complex().unwrap();
    let mut fc = base.clone();
    let frames = animate(&mut fc, Trafo::Erupt, &cfg(20), None).unwrap();
    for (got, want) in frames[&0].ps.iter().zip(drawn.drawps()) {
        let [x, y] = got.unwrap();
        let v = want.finite().unwrap() * DISPLAY_SCALE;
        assert!((x - v.x).abs() < 1e-6 && (y - v.y).abs() < 1e-6);
    }
}

#[test]
fn quad_flows_draw_two_inner_triangles() {
    for trafo in [
        Trafo::Shear,
        Trafo::Bulge,
        Trafo::EruptMinusPlus,
        Trafo::EruptPlusPlus,
    ] {
        let mut fc = quad();
        let frames = animate(&mut fc, trafo, &cfg(5), None).unwrap();
        assert_eq!(frames.len(), 11, "{trafo}");
        assert!(frames.values().all(|f| f.us.len() == 2 && f.ps.len() == 4));
    }
}

#[test]
fn no_trafo_is_a_single_still_frame() {
    let mut fc = conic_complex(&[0.0, 1.2, 2.5, 3.9, 5.1]).unwrap();
    let before = fc.points().to_vec();
    let frames = animate(&mut fc, Trafo::NoTrafo, &cfg(100), None).unwrap();
    assert_eq!(frames.keys().copied().collect::<Vec<_>>(), vec![0]);
    assert_eq!(frames[&0].us.len(), 3);
    assert_eq!(fc.points(), &before[..]);
}

#[test]
fn overrides_take_precedence() {
    let mut c = cfg(10);
    c.overrides.insert(
        Trafo::Bulge,
        TrafoRange {
            trafo_range: 2,
            t_step: 0.05,
        },
    );
    assert_eq!(c.range_for(Trafo::Bulge).frame_count(), 5);
    assert_eq!(c.range_for(Trafo::Shear).frame_count(), 21);
    assert_eq!(c.range_for(Trafo::NoTrafo).frame_count(), 1);
    let mut fc = quad();
    assert_eq!(animate(&mut fc, Trafo::Bulge, &c, None).unwrap().len(), 5);
}

#[test]
fn tessellation_is_attached_to_every_frame() {
    let mut fc = quad();
    let tess = HullTessellator { depth: 1 };
    let frames = animate(&mut fc, Trafo::Bulge, &cfg(2), Some(&tess as &dyn Tessellator)).unwrap();
    for frame in frames.values() {
        let tessellation = frame.tessellation.as_ref().unwrap();
        assert_eq!(tessellation.initial_polygon.len(), 4);
        assert_eq!(tessellation.tiles.len(), 2 * 4);
        assert_eq!(frame.convex.as_ref(), Some(&tessellation.convex_hull));
    }
}

#[test]
fn convex_serializes_as_a_flat_polygon() {
    let mut fc = quad();
    let tess = HullTessellator { depth: 1 };
    let frames = animate(&mut fc, Trafo::Shear, &cfg(1), Some(&tess as &dyn Tessellator)).unwrap();
    let json = serde_json::to_value(&frames).unwrap();
    let convex = &json["0"]["convex"];
    assert!(convex.is_array());
    let corners = convex.as_array().unwrap();
    // Every corner of the tangent quad is a hull vertex; the flag points are inside.
    assert_eq!(corners.len(), 4);
    assert!(corners.iter().all(|c| c.as_array().map(|xy| xy.len()) == Some(2)));
    assert!(json["0"]["tessellation"]["tiles"].is_array());
}

#[test]
fn largest_range_does_not_overflow() {
    let c = AnimationCfg {
        range: TrafoRange {
            trafo_range: u32::MAX,
            t_step: 1e-12,
        },
        ..AnimationCfg::default()
    };
    let mut fc = conic_complex(&[0.0, 2.1, 4.2]).unwrap();
    let keys: Vec<i64> = Animation::new(&mut fc, Trafo::Erupt, &c, None)
        .unwrap()
        .take(2)
        .map(|r| r.unwrap().0)
        .collect();
    let last = i64::from(u32::MAX);
    assert_eq!(keys, vec![-last, -last + 1]);
}

#[test]
fn iterator_can_stop_early() {
    let mut fc = quad();
    let taken: Vec<_> = Animation::new(&mut fc, Trafo::Shear, &cfg(50), None)
        .unwrap()
        .take(3)
        .collect::<Result<_, _>>()
        .unwrap();
    let keys: Vec<i64> = taken.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![-50, -49, -48]);
}

#[test]
fn pre_flight_rejects_bad_inputs() {
    let flags = [
        (vector![1.0, 0.0, 1.0], vector![1.0, 1.0, 1.0]),
        (vector![0.0, 1.0, 1.0], vector![1.0, 1.0, 1.0]),
        (vector![-1.0, -1.0, 1.0], vector![0.0, 0.0, 1.0]),
    ];
    let mut fc = FlagComplex::from_flags(&flags, &vector![0.0, 0.0, 1.0]).unwrap();
    assert!(matches!(
        animate(&mut fc, Trafo::Erupt, &cfg(3), None),
        Err(FlagError::NotPositive { .. })
    ));

    let mut three = conic_complex(&[0.0, 2.1, 4.2]).unwrap();
    assert_eq!(
        animate(&mut three, Trafo::Shear, &cfg(3), None),
        Err(FlagError::TooFewFlags { needed: 4, len: 3 })
    );

    let mut unplaced = FlagComplex::new();
    for (p, d) in flags {
        unplaced.add_flag(p, d).unwrap();
    }
    assert_eq!(
        animate(&mut unplaced, Trafo::Erupt, &cfg(3), None),
        Err(FlagError::MissingProjectionPlane)
    );
}

#[test]
fn points_at_infinity_serialize_as_null() {
    let frame = Frame {
        ps: vec![Some([1.0, 2.0]), None],
        qs: vec![None],
        us: vec![vec![None, Some([0.0, 0.0]), None]],
        convex: None,
        tessellation: None,
    };
    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["ps"][1], serde_json::Value::Null);
    assert_eq!(json["us"][0][1][0], 0.0);
    assert!(json.get("convex").is_none());
    assert!(json.get("tessellation").is_none());
}

#[test]
fn trafo_tags_round_trip_through_serde() {
    for trafo in Trafo::ALL {
        let json = serde_json::to_string(&trafo).unwrap();
        assert_eq!(json, format!("\"{}\"", trafo.as_str()));
        assert_eq!(trafo.as_str().parse::<Trafo>(), Ok(trafo));
    }
    assert!("erupt_pp".parse::<Trafo>().is_err());
}
