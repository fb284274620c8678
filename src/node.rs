/*!
# Node Representation

We choose `Node = u32` as graphs stored in a dense adjacency matrix never come close to `2^32`
nodes. A node is the canonical index of a vertex: its position in the vertex array and its row
(and column) in the adjacency matrix. All operations address vertices through these indices, so
there is never a need to map a vertex back to its row by identity.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes are the indices `0` to `n - 1` of a graph with `n` vertices
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
