// Topic extraction — the collaborator both pipelines consume topics from.
//
// The contract is `(document, N) -> up to N ordered topic strings`, earlier
// meaning more salient. The default implementation is local TF-IDF; the
// trait keeps it swappable for an embeddings-based extractor.

pub mod tfidf;
pub mod traits;
