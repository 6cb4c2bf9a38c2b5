use core::fmt::Debug;
use soroban_sdk::{Env, IntoVal, Topics, Val};

/// A typed contract event.
///
/// Topics identify the event and carry the fields indexers filter on, the data
/// carries everything else.
pub trait Event: Clone + Debug + PartialEq {
    fn topics(&self, env: &Env) -> impl Topics + Debug;

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug;

    fn emit(self, env: &Env) {
        env.events().publish(self.topics(env), self.data(env));
    }
}

#[cfg(test)]
mod test {
    use crate::events::Event;
    use crate::testutils::assert_last_event;
    use core::fmt::Debug;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{
        contract, contractimpl, Address, Env, IntoVal, String, Symbol, Topics, Val,
    };

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct PingEvent {
        from: Address,
        note: String,
    }

    impl Event for PingEvent {
        fn topics(&self, env: &Env) -> impl Topics + Debug {
            (Symbol::new(env, "ping"), self.from.clone())
        }

        fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
            (self.note.clone(),)
        }
    }

    #[contract]
    struct Pinger;

    #[contractimpl]
    impl Pinger {
        pub fn ping(env: Env, from: Address, note: String) {
            PingEvent { from, note }.emit(&env);
        }
    }

    #[test]
    fn emitted_event_matches_topics_and_data() {
        let env = Env::default();
        let contract_id = env.register(Pinger, ());
        let client = PingerClient::new(&env, &contract_id);

        let from = Address::generate(&env);
        let note = String::from_str(&env, "hello");
        client.ping(&from, &note);

        assert_last_event(&env, &contract_id, PingEvent { from, note });
    }
}
