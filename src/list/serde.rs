use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::list::List;

impl<T: Serialize> Serialize for List<T> {
    /// Serializes the list as a sequence, in logical order from the root;
    /// the arena layout and the node handles are not part of the format.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
    type Value = List<T>;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = List::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            list.push(value);
        }
        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ListVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn serializes_in_logical_order() {
        let mut list = List::from_iter([9, 1, 2]);
        list.shift().unwrap();
        list.push(3);
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
    }

    #[test]
    fn deserializes_from_a_sequence() {
        let list: List<i32> = serde_json::from_str("[1,2,3]").unwrap();
        list.assert_ring(&[1, 2, 3]);

        let empty: List<i32> = serde_json::from_str("[]").unwrap();
        empty.assert_ring(&[]);

        assert!(serde_json::from_str::<List<i32>>("5").is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let list = List::from_iter(["a", "b"]);
        let json = serde_json::to_string(&list).unwrap();
        let back: List<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_vec(), vec!["a", "b"]);
    }
}
