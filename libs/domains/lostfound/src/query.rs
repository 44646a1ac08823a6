//! FT.SEARCH KNN query construction.
//!
//! Produces the exact argument list RediSearch expects for a
//! filter-plus-KNN query:
//!
//! ```text
//! FT.SEARCH <index>
//!   "(@PartnerID:{<id>} @tag:{Found})=>[KNN <k> @vector $vec AS score]"
//!   SORTBY score ASC
//!   RETURN 4 Description Item PartnerID score
//!   LIMIT 0 <k>
//!   PARAMS 2 vec <raw f32 bytes>
//!   DIALECT 2
//! ```
//!
//! Dialect 2 is required: earlier dialects do not parse the combined
//! filter=>KNN syntax.

use crate::models::FOUND_TAG;

/// Default number of neighbors requested per search
pub const DEFAULT_K: usize = 5;

/// Query-language dialect required for filtered KNN
const DIALECT: usize = 2;

/// A fully specified KNN search against the report index
#[derive(Clone, Debug)]
pub struct KnnQuery {
    index: String,
    partner_id: String,
    vector: Vec<f32>,
    k: usize,
}

impl KnnQuery {
    pub fn new(index: impl Into<String>, partner_id: impl Into<String>, vector: Vec<f32>) -> Self {
        Self {
            index: index.into(),
            partner_id: partner_id.into(),
            vector,
            k: DEFAULT_K,
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k.max(1);
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// The filter + KNN expression string
    pub fn expression(&self) -> String {
        format!(
            "(@PartnerID:{{{}}} @tag:{{{}}})=>[KNN {} @vector $vec AS score]",
            self.partner_id, FOUND_TAG, self.k
        )
    }

    /// Query vector packed as raw little-endian f32 bytes, the layout the
    /// index stores and the layout numpy's `.tobytes()` produced when the
    /// index was built.
    pub fn vector_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.vector.len() * 4);
        for value in &self.vector {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    /// The raw argument list after the command name, in wire order
    pub fn args(&self) -> Vec<Vec<u8>> {
        let mut args: Vec<Vec<u8>> = Vec::new();

        let mut push_str = |args: &mut Vec<Vec<u8>>, s: &str| args.push(s.as_bytes().to_vec());

        push_str(&mut args, &self.index);
        push_str(&mut args, &self.expression());
        push_str(&mut args, "SORTBY");
        push_str(&mut args, "score");
        push_str(&mut args, "ASC");
        push_str(&mut args, "RETURN");
        push_str(&mut args, "4");
        push_str(&mut args, "Description");
        push_str(&mut args, "Item");
        push_str(&mut args, "PartnerID");
        push_str(&mut args, "score");
        push_str(&mut args, "LIMIT");
        push_str(&mut args, "0");
        push_str(&mut args, &self.k.to_string());
        push_str(&mut args, "PARAMS");
        push_str(&mut args, "2");
        push_str(&mut args, "vec");
        args.push(self.vector_bytes());
        push_str(&mut args, "DIALECT");
        push_str(&mut args, &DIALECT.to_string());

        args
    }

    /// Assemble the redis command, ready for `query_async`
    pub fn to_cmd(&self) -> redis::Cmd {
        let mut cmd = redis::cmd("FT.SEARCH");
        for arg in self.args() {
            cmd.arg(arg);
        }
        cmd
    }
}
