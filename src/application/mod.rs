// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// One use case per SMART track. Each one:
//   1. loads its inputs          (Layer 4 - data)
//   2. scores every question     (Layer 5 - scoring)
//   3. writes optional outputs   (Layer 6 - infra)
//   4. returns a report          (printed by Layer 1)
//
// Rules for this layer:
//   - No printing here (that's Layer 1)
//   - No metric math here (that's Layer 5)
//   - Only workflow coordination

// DBpedia track: accuracy + lenient NDCG@5/10
pub mod dbpedia_use_case;

// Wikidata track: accuracy + MRR
pub mod wikidata_use_case;
