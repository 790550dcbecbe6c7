use oftalmo_protocols::error::ProtocolError;
use oftalmo_protocols::evaluate::{MAX_SCORE, age_baseline};
use oftalmo_protocols::{EvaluationResult, evaluate};

const NO_FINDINGS: [&str; 0] = [];

#[test]
fn baseline_is_zero_up_to_sixty() {
    for age in [0, 1, 30, 59, 60] {
        assert_eq!(age_baseline(age), 0, "age {age}");
        assert_eq!(evaluate(age, NO_FINDINGS).unwrap().score, 0);
    }
}

#[test]
fn baseline_is_two_above_sixty() {
    for age in [61, 70, 99, 120] {
        assert_eq!(age_baseline(age), 2, "age {age}");
        assert_eq!(evaluate(age, NO_FINDINGS).unwrap().score, 2);
    }
}

#[test]
fn empty_selection_returns_only_baseline() {
    let result = evaluate(65, NO_FINDINGS).unwrap();
    assert_eq!(
        result,
        EvaluationResult {
            score: 2,
            ..EvaluationResult::default()
        }
    );
}

#[test]
fn elevated_pressure_in_senior() {
    let result = evaluate(70, ["PIO > 19mmHg"]).unwrap();

    assert_eq!(result.score, 7);
    assert_eq!(
        result.exams,
        vec![
            "Campimetria – AO",
            "OCT de Nervo Óptico – AO",
            "Paquimetria – AO",
        ]
    );
    assert_eq!(result.bibliography, vec!["OHTS Study / AAO POAG"]);
    assert_eq!(result.justification, "Investigação de HT Ocular e risco OHTS.");
    assert_eq!(result.reference_links.len(), 1);
    assert_eq!(result.reference_links[0].label, "OHTS Study / AAO POAG");
    assert_eq!(
        result.reference_links[0].uri,
        "https://www.aao.org/education/preferred-practice-pattern/primary-open-angle-glaucoma-ppp"
    );
}

#[test]
fn diabetes_and_hypertension_union() {
    let result = evaluate(30, ["Diabetes", "Hipertensão"]).unwrap();

    assert_eq!(result.score, 8);
    // Retinografia Colorida appears in both rules and is listed once.
    assert_eq!(
        result.exams,
        vec![
            "Mapeamento de Retina – AO",
            "OCT de Mácula – AO",
            "Retinografia Colorida – AO",
        ]
    );
    assert_eq!(
        result.bibliography,
        vec!["AAO Diabetic Retinopathy", "Diretrizes SBC/CBO"]
    );
    let labels: Vec<_> = result
        .reference_links
        .iter()
        .map(|l| l.label.as_str())
        .collect();
    assert_eq!(labels, ["AAO Diabetic Retinopathy", "Diretrizes SBC/CBO"]);
    assert_eq!(
        result.justification,
        "Rastreio de retinopatia diabética (ETDRS). Avaliação de alterações microvasculares sistêmicas."
    );
}

#[test]
fn score_is_clamped_to_ten() {
    let result = evaluate(
        65,
        ["Glaucoma confirmado", "Escavação > 0.5", "Suspeita de glaucoma"],
    )
    .unwrap();
    assert_eq!(result.score, 10);
}

#[test]
fn every_finding_selected_still_clamps() {
    let all: Vec<&str> = oftalmo_protocols::catalog().all_finding_names();
    let result = evaluate(80, &all).unwrap();
    assert_eq!(u32::from(result.score), MAX_SCORE);
    assert_eq!(result.reference_links.len(), all.len());
}

#[test]
fn unknown_finding_behaves_like_empty() {
    let result = evaluate(40, ["NonexistentFinding"]).unwrap();
    assert_eq!(result, EvaluationResult::default());
}

#[test]
fn unknown_findings_are_skipped_among_known_ones() {
    let result = evaluate(40, ["legacy item", "Olho seco", ""]).unwrap();
    assert_eq!(result.score, 2);
    assert_eq!(result.exams, vec!["Ceratoscopia – AO", "Teste de Shirmmer – AO"]);
    assert_eq!(result.reference_links.len(), 1);
}

#[test]
fn output_order_does_not_depend_on_selection_order() {
    let forward = evaluate(50, ["Trauma ocular", "Miopia > -1.00", "Diabetes"]).unwrap();
    let backward = evaluate(50, ["Diabetes", "Miopia > -1.00", "Trauma ocular"]).unwrap();

    assert_eq!(forward.score, backward.score);
    assert_eq!(forward.exams, backward.exams);
    assert_eq!(forward.bibliography, backward.bibliography);

    let mut sorted = forward.exams.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(forward.exams, sorted);
}

#[test]
fn reference_links_follow_selection_order() {
    let result = evaluate(50, ["Trauma ocular", "Diabetes"]).unwrap();
    let labels: Vec<_> = result
        .reference_links
        .iter()
        .map(|l| l.label.as_str())
        .collect();
    assert_eq!(labels, ["Ocular Trauma Score", "AAO Diabetic Retinopathy"]);
}

#[test]
fn duplicate_selection_counts_twice_but_lists_once() {
    let result = evaluate(20, ["Olho seco", "Olho seco"]).unwrap();

    assert_eq!(result.score, 4);
    assert_eq!(result.exams.len(), 2);
    assert_eq!(result.bibliography, vec!["TFOS DEWS II"]);
    assert_eq!(result.reference_links.len(), 2);
    assert_eq!(result.reference_links[0], result.reference_links[1]);
    assert_eq!(
        result.justification,
        "Avaliação de superfície ocular e filme lacrimal. Avaliação de superfície ocular e filme lacrimal."
    );
}

#[test]
fn shared_bibliography_label_is_listed_once() {
    // Both rules cite "AAO POAG PPP".
    let result = evaluate(45, ["Hipermetropia > +2.50", "Escavação > 0.5"]).unwrap();
    assert_eq!(result.bibliography, vec!["AAO POAG PPP"]);
    assert_eq!(result.reference_links.len(), 2);
}

#[test]
fn retina_mapping_spellings_stay_distinct() {
    let result = evaluate(40, ["Hipertensão", "Trauma ocular"]).unwrap();
    assert!(result.exams.iter().any(|e| e == "Mapeamento de Retina – AO"));
    assert!(result.exams.iter().any(|e| e == "Mapeamento de Retina"));
}

#[test]
fn negative_age_is_rejected() {
    let err = evaluate(-1, ["Diabetes"]).unwrap_err();
    assert!(matches!(err, ProtocolError::InvalidAge(-1)));
}

#[test]
fn evaluation_is_repeatable() {
    let findings = vec![
        "Suspeita de uveíte".to_string(),
        "Lesão em retina".to_string(),
    ];
    let first = evaluate(62, &findings).unwrap();
    let second = evaluate(62, &findings).unwrap();
    assert_eq!(first, second);
}

#[test]
fn concurrent_evaluations_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| evaluate(70, ["PIO > 19mmHg", "Diabetes"]).unwrap()))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].score, 10);
}
