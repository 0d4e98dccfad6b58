use genexpr::{
    chromosome::Chromosome,
    decoder::{decode, render_text, render_value, NumericCombine},
    evolution::{fitness, Challenge, TargetChallenge},
    gene::GENE_SIZE,
    rng::RandomNumberGenerator,
};

fn chromosome(s: &str) -> Chromosome {
    s.parse().unwrap()
}

#[test]
fn test_decoding_is_deterministic() {
    let mut rng = RandomNumberGenerator::from_seed(1);
    for _ in 0..200 {
        let c = Chromosome::random(20, &mut rng);
        let first = render_value(&c, GENE_SIZE);
        let second = render_value(&c, GENE_SIZE);
        // NaN never equals itself, so compare bit patterns
        assert_eq!(first.map(f64::to_bits), second.map(f64::to_bits));
        assert_eq!(render_text(&c, GENE_SIZE), render_text(&c, GENE_SIZE));
    }
}

#[test]
fn test_unassigned_gene_is_skipped() {
    let plain = chromosome("0010 1100 0100 1010 0010");
    let expected = render_value(&plain, GENE_SIZE);

    // Insert 1110 or 1111 in front of every gene in turn
    for unassigned in ["1110", "1111"] {
        for gene in 0..5 {
            let mut text = plain.to_string();
            text.insert_str(gene * GENE_SIZE, unassigned);
            let padded = chromosome(&text);

            assert_eq!(render_value(&padded, GENE_SIZE), expected, "inserted at gene {}", gene);
            assert_eq!(render_text(&padded, GENE_SIZE), render_text(&plain, GENE_SIZE));
        }
    }
}

#[test]
fn test_text_agrees_with_value() {
    let mut rng = RandomNumberGenerator::from_seed(3);
    for _ in 0..500 {
        let c = Chromosome::random(20, &mut rng);
        let (Some(text), Some(value)) = (render_text(&c, GENE_SIZE), render_value(&c, GENE_SIZE)) else {
            continue;
        };

        // Re-evaluate the rendering left to right
        let mut tokens = text.split(' ');
        let mut acc: f64 = tokens.next().unwrap().parse().unwrap();
        while let (Some(op), Some(n)) = (tokens.next(), tokens.next()) {
            let n: f64 = n.parse().unwrap();
            acc = match op {
                "+" => acc + n,
                "-" => acc - n,
                "*" => acc * n,
                "/" => acc / n,
                other => panic!("unexpected operator {}", other),
            };
        }

        if value.is_nan() {
            assert!(acc.is_nan(), "{}", text);
        } else {
            assert_eq!(acc, value, "{}", text);
        }
    }
}

#[test]
fn test_division_by_zero_scores_minimum() {
    let challenge = TargetChallenge::new(10.0).unwrap();
    let generation = [
        chromosome("0101 1101 0000 1111 1111"), // 5 / 0
        chromosome("0011 1010 0100 1111 1111"), // 3 + 4
        chromosome("1001 1111 1111 1111 1111"), // 9
        chromosome("1010 1010 1111 1110 1011"), // nothing
    ];

    let scores: Vec<f64> = generation
        .iter()
        .map(|c| challenge.score(decode(c, GENE_SIZE, &NumericCombine)))
        .collect();

    assert_eq!(render_text(&generation[0], GENE_SIZE).as_deref(), Some("5 / 0"));
    assert_eq!(scores[0], 0.0);
    assert_eq!(scores[3], 0.0);
    assert!(scores.iter().all(|&s| s >= scores[0]));
    assert_eq!(scores[1], fitness(10.0, 7.0));
    assert_eq!(scores[2], 1.0);
}

#[test]
fn test_example_expression() {
    let c = chromosome("0010 1100 0100 1010 0010");
    assert_eq!(render_text(&c, GENE_SIZE).as_deref(), Some("2 * 4 + 2"));
    assert_eq!(render_value(&c, GENE_SIZE), Some(10.0));
}
