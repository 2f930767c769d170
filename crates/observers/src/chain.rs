use stride_core::Observer;

/// Invokes two observers in registration order.
///
/// The first observer to return an action wins; later observers in the
/// chain are not consulted for that event. Chains nest, so any number of
/// observers can be registered: `Chain(a, Chain(b, c))`.
#[derive(Debug, Clone)]
pub struct Chain<A, B>(pub A, pub B);

impl<E, Act, A, B> Observer<E, Act> for Chain<A, B>
where
    A: Observer<E, Act>,
    B: Observer<E, Act>,
{
    fn observe(&mut self, event: &E) -> Option<Act> {
        match self.0.observe(event) {
            Some(action) => Some(action),
            None => self.1.observe(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Act {
        First,
        Second,
    }

    #[test]
    fn invokes_in_order_and_short_circuits() {
        let mut first_seen = 0;
        let mut second_seen = 0;
        {
            let first = |event: &u32| {
                first_seen += 1;
                if *event > 5 { Some(Act::First) } else { None }
            };
            let second = |_: &u32| {
                second_seen += 1;
                Some(Act::Second)
            };
            let mut chain = Chain(first, second);

            assert_eq!(chain.observe(&1), Some(Act::Second));
            assert_eq!(chain.observe(&9), Some(Act::First));
        }

        // The second observer was skipped for the event the first claimed.
        assert_eq!(first_seen, 2);
        assert_eq!(second_seen, 1);
    }

    #[test]
    fn chains_nest() {
        let a = |_: &u32| None::<Act>;
        let b = |_: &u32| None::<Act>;
        let c = |event: &u32| if *event == 3 { Some(Act::First) } else { None };
        let mut chain = Chain(a, Chain(b, c));

        assert_eq!(chain.observe(&0), None);
        assert_eq!(chain.observe(&3), Some(Act::First));
    }
}
