use folio::Session;
use folio::doctree::{DocIndex, validate};
use folio::input_core::Transition;

const KEYS: &[&str] = &[
    "ArrowLeft",
    "ArrowRight",
    "ArrowUp",
    "Backspace",
    "Delete",
    "a",
    "€",
    " ",
    "Enter",
    "Escape",
];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn gen_range(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        (self.next_u64() >> 32) as usize % upper
    }
}

fn check(session: &Session, seed: u64, step: usize) {
    let doc = session.document();
    let violations = validate(doc.root());
    assert!(
        violations.is_empty(),
        "seed {seed} step {step}: {violations:?}"
    );

    let index = DocIndex::build(doc.root());
    let cursor = session.cursor();
    assert!(
        index.is_leaf_like(cursor.leaf),
        "seed {seed} step {step}: cursor on non-leaf {}",
        cursor.leaf
    );
    let len = index.char_len(cursor.leaf).unwrap_or(0);
    assert!(cursor.offset <= len, "seed {seed} step {step}: offset out of range");
    assert!(session.caret().x >= 0.0, "seed {seed} step {step}: negative caret");
}

#[test]
fn random_key_sequences_keep_invariants() {
    for seed in 1..=24u64 {
        let mut rng = Lcg::new(seed);
        let mut session = Session::with_sample();
        for step in 0..300 {
            let key = KEYS[rng.gen_range(KEYS.len())];
            let version = session.document().version();
            let transition = session.key(key);
            if let Transition::Unchanged(_) | Transition::Moved { .. } = transition {
                assert_eq!(session.document().version(), version);
            } else {
                assert!(session.document().version() > version);
            }
            check(&session, seed, step);
            if step % 50 == 49 {
                session.render();
                check(&session, seed, step);
            }
        }
    }
}

#[test]
fn deleting_backward_stops_at_document_start() {
    let mut session = Session::with_sample();
    for _ in 0..40 {
        session.key("ArrowRight");
    }
    for _ in 0..2_000 {
        if session.key("Backspace").is_unchanged() {
            break;
        }
    }
    assert!(session.key("Backspace").is_unchanged());
    assert_eq!(session.cursor().offset, 0);

    let doc = session.document();
    assert!(validate(doc.root()).is_empty());
    let original = folio::doctree::seed::sample_document().text();
    assert!(doc.text().chars().count() < original.chars().count());
    assert!(original.ends_with(&doc.text()));
}
