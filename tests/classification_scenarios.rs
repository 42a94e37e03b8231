//! End-to-end classification of synthetic faces.

use face_shape::{
    Analyzer, ClassificationUnavailable, Classifier, ClassifierConfig, FaceShape, LandmarkRole,
    LandmarkSet, MeasurementKind, Point, Ratios, Source,
};

/// Symmetric face centred on x = 0.5, as a 468-point landmark set.
fn face(length: f64, forehead: f64, cheek: f64, jaw: f64) -> LandmarkSet {
    let mut set = LandmarkSet::empty(468);
    let cx = 0.5;
    let placements = [
        (LandmarkRole::Top, Point::new(cx, 0.1)),
        (LandmarkRole::Chin, Point::new(cx, 0.1 + length)),
        (LandmarkRole::ForeheadLeft, Point::new(cx - forehead / 2.0, 0.22)),
        (LandmarkRole::ForeheadRight, Point::new(cx + forehead / 2.0, 0.22)),
        (LandmarkRole::CheekLeft, Point::new(cx - cheek / 2.0, 0.42)),
        (LandmarkRole::CheekRight, Point::new(cx + cheek / 2.0, 0.42)),
        (LandmarkRole::JawLeft, Point::new(cx - jaw / 2.0, 0.62)),
        (LandmarkRole::JawRight, Point::new(cx + jaw / 2.0, 0.62)),
    ];
    for (role, point) in placements {
        set.set(role.index(), point);
    }
    set
}

fn assert_distribution(scores: &[face_shape::ShapeScore]) {
    assert_eq!(scores.len(), 6);
    for s in scores {
        assert!(s.score.is_finite());
        assert!((0.0..=1.0).contains(&s.score), "{} out of range", s.shape);
    }
    let sum: f64 = scores.iter().map(|s| s.score).sum();
    assert!((sum - 1.0).abs() < 1e-9, "scores sum to {sum}");
}

#[test]
fn long_face_with_narrow_jaw_is_oval() {
    // length = 1.6 x cheek, jaw = 0.85 x cheek, forehead = 0.9 x cheek
    let cheek = 0.4;
    let landmarks = face(1.6 * cheek, 0.9 * cheek, cheek, 0.85 * cheek);
    let result = Classifier::default().classify(&landmarks).unwrap();

    assert_eq!(result.shape, FaceShape::Oval);
    assert!(result.confidence > 0.3, "confidence {}", result.confidence);
    assert_eq!(result.ranked()[0].shape, FaceShape::Oval);
    assert_distribution(&result.scores);
}

#[test]
fn even_widths_and_short_face_is_round() {
    let landmarks = face(0.5, 0.49, 0.5, 0.48);
    let result = Classifier::default().classify(&landmarks).unwrap();

    assert_eq!(result.shape, FaceShape::Round);
    assert_eq!(result.tips, FaceShape::Round.tips());
    assert_distribution(&result.scores);
}

#[test]
fn wide_forehead_and_tapered_jaw_is_heart() {
    // forehead/jaw ~1.18, jaw/cheek 0.76
    let cheek = 0.4;
    let landmarks = face(1.35 * cheek, 0.9 * cheek, cheek, 0.76 * cheek);
    let result = Classifier::default().classify(&landmarks).unwrap();

    assert_eq!(result.shape, FaceShape::Heart);
    assert_distribution(&result.scores);
}

#[test]
fn extreme_proportions_are_inconclusive() {
    let ratios = Ratios {
        length_to_cheek: 5.0,
        forehead_to_jaw: 1.0,
        cheek_to_jaw: 1.0,
        jaw_to_cheek: 1.0,
        forehead_to_cheek: 1.0,
        cheek_to_forehead: 1.0,
        width_spread: 1.0,
    };
    let classifier = Classifier::default();
    let raw = face_shape::raw_scores(&classifier.config().profiles, &ratios);
    assert!(raw.iter().all(|s| s.score == 0.0));

    assert_eq!(
        classifier.classify_ratios(&ratios),
        Err(ClassificationUnavailable::Inconclusive)
    );

    // Same thing through landmarks: a face five times longer than it is wide
    let landmarks = face(0.5, 0.1, 0.1, 0.1);
    assert_eq!(
        classifier.classify(&landmarks),
        Err(ClassificationUnavailable::Inconclusive)
    );
}

#[test]
fn coincident_cheekbones_never_divide_by_zero() {
    let landmarks = face(0.6, 0.36, 0.0, 0.32);
    let err = Classifier::default().classify(&landmarks).unwrap_err();
    assert_eq!(
        err,
        ClassificationUnavailable::DegenerateMeasurement {
            measurement: MeasurementKind::CheekWidth
        }
    );

    let response = Analyzer::default().analyze(&[landmarks]);
    assert_eq!(response.source, Source::Demo);
    assert!(response.normalized.confidence.is_finite());
    assert!(response
        .normalized
        .scores
        .iter()
        .all(|s| s.score.is_finite()));
}

#[test]
fn truncated_and_null_landmarks_are_missing() {
    let classifier = Classifier::default();

    let mut truncated = face(0.6, 0.36, 0.4, 0.32);
    truncated.points.truncate(400);
    assert_eq!(
        classifier.classify(&truncated),
        Err(ClassificationUnavailable::MissingLandmark {
            index: 454,
            role: LandmarkRole::CheekRight
        })
    );

    let mut with_null = face(0.6, 0.36, 0.4, 0.32);
    with_null.points[LandmarkRole::Chin.index()] = None;
    assert!(matches!(
        classifier.classify(&with_null),
        Err(ClassificationUnavailable::MissingLandmark { index: 152, .. })
    ));
}

#[test]
fn classification_is_deterministic() {
    let classifier = Classifier::default();
    let landmarks = face(0.55, 0.37, 0.41, 0.33);
    let first = classifier.classify(&landmarks).unwrap();
    for _ in 0..10 {
        assert_eq!(classifier.classify(&landmarks.clone()).unwrap(), first);
    }
}

#[test]
fn detector_output_from_json() {
    let mut points = vec![serde_json::Value::Null; 468];
    let landmarks = face(0.64, 0.36, 0.4, 0.34);
    for role in LandmarkRole::ALL {
        let p = landmarks.get(role.index()).unwrap();
        points[role.index()] = serde_json::json!({"x": p.x, "y": p.y, "z": 0.0});
    }
    let json = serde_json::to_string(&points).unwrap();

    let parsed: LandmarkSet = serde_json::from_str(&json).unwrap();
    let response = Analyzer::default().analyze(&[parsed]);
    assert!(response.ok);
    assert_eq!(response.source, Source::Local);
    assert_eq!(response.normalized.shape, "Oval");
}

#[test]
fn custom_config_changes_outcome() {
    // Only Square and Round, with Square's length band widened to cover short faces
    let mut config = ClassifierConfig::default();
    config.profiles.retain(|p| matches!(p.shape, FaceShape::Square | FaceShape::Round));
    config.profiles.swap(0, 1);
    config.profiles[0].bands[0].min = 0.9;

    let classifier = Classifier::new(config).unwrap();
    let result = classifier.classify(&face(0.5, 0.49, 0.5, 0.48)).unwrap();

    assert_eq!(result.scores.len(), 2);
    assert_eq!(result.scores[0].shape, FaceShape::Square);
    // Both score 1.0; Square is listed first so it takes the tie
    assert_eq!(result.shape, FaceShape::Square);
    assert!((result.confidence - 0.5).abs() < 1e-12);
}

#[test]
fn detector_envelope_through_analyzer() {
    let face_json = serde_json::to_string(&face(0.64, 0.36, 0.4, 0.34)).unwrap();
    let envelope = format!(r#"{{"faceLandmarks": [{face_json}, {face_json}]}}"#);

    let faces = face_shape::read_detection(envelope.as_bytes()).unwrap();
    assert_eq!(faces.len(), 2);

    let response = Analyzer::default().analyze_reader(envelope.as_bytes());
    assert_eq!(response.source, Source::Local);
    assert_eq!(response.error.as_deref(), Some(face_shape::MULTIPLE_FACES_MESSAGE));
}
