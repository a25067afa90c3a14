use std::collections::HashMap;

use crate::{
    AgreementMatcher, EntityType, FeatureExtractor, Gender, MatchOutcome, Mention, ParseTree,
    Rejection,
};

struct Fixture {
    names: HashMap<String, Gender>,
    nouns: HashMap<String, String>,
}

impl Fixture {
    fn new() -> Self {
        let names = [("maria", Gender::Female), ("john", Gender::Male)]
            .into_iter()
            .map(|(name, gender)| (name.to_string(), gender))
            .collect();
        let nouns = [("president", "person"), ("man", "person"), ("company", "group")]
            .into_iter()
            .map(|(word, ty)| (word.to_string(), ty.to_string()))
            .collect();
        Self { names, nouns }
    }

    fn matcher(&self) -> AgreementMatcher<'_> {
        AgreementMatcher::new(FeatureExtractor::new(&self.names, &self.nouns))
    }
}

fn parse(text: &str) -> ParseTree {
    ParseTree::from_bracketed(text).unwrap()
}

fn mention<'t>(tree: &'t ParseTree, text: &str, entity_type: EntityType) -> Mention<'t> {
    let node = tree
        .find("NP", text)
        .unwrap_or_else(|| panic!("no NP {:?} in {}", text, tree));
    Mention::new(tree, node, entity_type)
}

/// Pronoun in one sentence, candidate in another.
fn outcome(
    fixture: &Fixture,
    pronoun: &str,
    candidate: &str,
    candidate_type: EntityType,
) -> MatchOutcome {
    let pronoun_tree = parse(&format!("(ROOT (S (NP (PRP {})) (VP (VBD left))))", pronoun));
    let candidate_tree = parse(candidate);
    let pronoun = Mention::new(
        &pronoun_tree,
        pronoun_tree.find("NP", pronoun).unwrap(),
        EntityType::None,
    );
    let candidate = Mention::new(&candidate_tree, candidate_tree.root(), candidate_type);
    fixture.matcher().explain(&pronoun, &candidate)
}

#[test]
fn she_resolves_to_a_female_name() {
    let fixture = Fixture::new();
    let tree = parse(
        "(ROOT (S (NP (NNP Maria)) (VP (VBD said) (SBAR (S (NP (PRP she)) (VP (VBD won)))))))",
    );
    let maria = mention(&tree, "Maria", EntityType::Person);
    let she = mention(&tree, "she", EntityType::None);

    assert!(fixture.matcher().check_pronominal_match(&she, &maria));
}

#[test]
fn he_does_not_resolve_to_an_untyped_common_noun() {
    // "he" is a person; "the committee" has no entity tag, so its personhood
    // is undetermined, which is not in the person class.
    let fixture = Fixture::new();
    let result = outcome(
        &fixture,
        "he",
        "(NP (DT the) (NN committee))",
        EntityType::None,
    );
    assert_eq!(result, MatchOutcome::Rejected(Rejection::Personhood));
}

#[test]
fn first_person_never_resolves_to_a_noun_phrase() {
    let fixture = Fixture::new();
    let result = outcome(
        &fixture,
        "I",
        "(NP (DT the) (NN president))",
        EntityType::None,
    );
    assert_eq!(result, MatchOutcome::Rejected(Rejection::FirstPersonNominal));

    // every feature agrees, the perspective rule still wins
    let result = outcome(&fixture, "I", "(NP (NNP John))", EntityType::Person);
    assert_eq!(result, MatchOutcome::Rejected(Rejection::FirstPersonNominal));
}

#[test]
fn first_person_resolves_to_another_first_person_pronoun() {
    let fixture = Fixture::new();
    let result = outcome(
        &fixture,
        "I",
        "(ROOT (S (NP (PRP I)) (VP (VBD arrived))))",
        EntityType::None,
    );
    // the candidate here is the ROOT, which is not a pronoun
    assert_eq!(result, MatchOutcome::Rejected(Rejection::FirstPersonNominal));

    let earlier = parse("(ROOT (S (NP (PRP I)) (VP (VBD arrived))))");
    let later = parse("(ROOT (S (NP (PRP I)) (VP (VBD left))))");
    let first = mention(&earlier, "I", EntityType::None);
    let second = mention(&later, "I", EntityType::None);
    assert!(fixture.matcher().check_pronominal_match(&second, &first));
}

#[test]
fn pronoun_cannot_corefer_with_a_phrase_containing_it() {
    let fixture = Fixture::new();
    let tree = parse(
        "(ROOT (S (NP (NP (DT the) (NN man)) (SBAR (WHNP (WP who)) (S (NP (PRP he)) (VP (VBD saw))))) (VP (VBD left))))",
    );
    let he = mention(&tree, "he", EntityType::None);
    let containing = mention(&tree, "the man who he saw", EntityType::None);
    let inner = mention(&tree, "the man", EntityType::None);

    let matcher = fixture.matcher();
    assert_eq!(
        matcher.explain(&he, &containing),
        MatchOutcome::Rejected(Rejection::Dominated)
    );
    assert!(!matcher.check_pronominal_match(&he, &containing));
    assert!(matcher.check_pronominal_match(&he, &inner));
}

#[test]
fn they_resolves_to_plural_phrases() {
    let fixture = Fixture::new();
    assert_eq!(
        outcome(
            &fixture,
            "they",
            "(NP (DT the) (NNS committees))",
            EntityType::None
        ),
        MatchOutcome::Compatible
    );
    assert_eq!(
        outcome(&fixture, "they", "(NP (NNP John))", EntityType::Person),
        MatchOutcome::Rejected(Rejection::Number)
    );
}

#[test]
fn missing_gender_does_not_match_female() {
    let fixture = Fixture::new();
    // "they" has no gender and Maria is female
    assert_eq!(
        outcome(&fixture, "they", "(NP (NNP Maria))", EntityType::Person),
        MatchOutcome::Rejected(Rejection::Gender)
    );
    // "he" matches a person whose gender is unknown
    assert_eq!(
        outcome(
            &fixture,
            "he",
            "(NP (DT the) (NN president))",
            EntityType::None
        ),
        MatchOutcome::Compatible
    );
    // "she" does not
    assert_eq!(
        outcome(
            &fixture,
            "she",
            "(NP (DT the) (NN president))",
            EntityType::None
        ),
        MatchOutcome::Rejected(Rejection::Gender)
    );
}

#[test]
fn it_resolves_to_organizations_not_people() {
    let fixture = Fixture::new();
    assert_eq!(
        outcome(
            &fixture,
            "it",
            "(NP (DT the) (NN company))",
            EntityType::Organization
        ),
        MatchOutcome::Compatible
    );
    assert_eq!(
        outcome(&fixture, "it", "(NP (NNP Maria))", EntityType::Person),
        MatchOutcome::Rejected(Rejection::Personhood)
    );
}

#[test]
fn undetermined_number_never_matches() {
    let fixture = Fixture::new();
    assert_eq!(
        outcome(&fixture, "it", "(NP (DT the) (JJ rich))", EntityType::None),
        MatchOutcome::Rejected(Rejection::Number)
    );
}

#[test]
#[should_panic(expected = "non-pronominal")]
fn rejects_non_pronominal_mention() {
    let fixture = Fixture::new();
    let tree = parse("(ROOT (S (NP (NNP Maria)) (VP (VBD met) (NP (NNP John)))))");
    let maria = mention(&tree, "Maria", EntityType::Person);
    let john = mention(&tree, "John", EntityType::Person);
    fixture.matcher().check_pronominal_match(&maria, &john);
}

#[test]
fn matcher_is_shareable_across_threads() {
    let fixture = Fixture::new();
    let matcher = fixture.matcher();
    let tree = parse(
        "(ROOT (S (NP (NNP Maria)) (VP (VBD said) (SBAR (S (NP (PRP she)) (VP (VBD won)))))))",
    );
    let maria = mention(&tree, "Maria", EntityType::Person);
    let she = mention(&tree, "she", EntityType::None);

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| matcher.check_pronominal_match(&she, &maria)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, [true; 4]);
}
