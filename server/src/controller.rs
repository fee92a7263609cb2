use std::future::IntoFuture;
use std::marker::PhantomData;

// Original: https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Intake that may reject its input, e.g. on a malformed request body.
pub trait TryIntake<I>: 'static + Sync + Send {
    type To;
    type Error;
    fn emit(&self, input: I) -> Result<Self::To, Self::Error>;
}

pub trait Exhaust<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub struct Controller<T, P, I, D, O> {
    transformer: T,
    presenter: P,
    _i: PhantomData<I>,
    _t: PhantomData<D>,
    _o: PhantomData<O>,
}

impl<T, P, I, D, O> Controller<T, P, I, D, O> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
            _i: PhantomData,
            _t: PhantomData,
            _o: PhantomData,
        }
    }

    fn preset(self) -> P {
        self.presenter
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: Intake<I, To = D>,
{
    pub fn intake(self, input: I) -> Transformed<T, P, I, D, O> {
        Transformed {
            transformed: self.transformer.emit(input),
            controller: self,
        }
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: TryIntake<I, To = D>,
{
    pub fn try_intake(self, input: I) -> Result<Transformed<T, P, I, D, O>, T::Error> {
        Ok(Transformed {
            transformed: self.transformer.emit(input)?,
            controller: self,
        })
    }
}

impl<P, O> Controller<(), P, (), (), O>
where
    P: Exhaust<O>,
{
    pub async fn bypass<F, Fut, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        Ok(self.preset().emit(f().await?))
    }
}

pub struct Transformed<T, P, I, D, O> {
    transformed: D,
    controller: Controller<T, P, I, D, O>,
}

impl<T, P, I, D, O> Transformed<T, P, I, D, O>
where
    P: Exhaust<O>,
{
    pub async fn handle<F, Fut, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce(D) -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        Ok(self.controller.preset().emit(f(self.transformed).await?))
    }
}

#[cfg(test)]
mod test {
    use crate::controller::{Controller, Exhaust, Intake, TryIntake};

    struct Doubler;

    impl Intake<i64> for Doubler {
        type To = i64;
        fn emit(&self, input: i64) -> Self::To {
            input * 2
        }
    }

    impl TryIntake<&'static str> for Doubler {
        type To = i64;
        type Error = String;
        fn emit(&self, input: &'static str) -> Result<Self::To, Self::Error> {
            input
                .parse::<i64>()
                .map(|value| value * 2)
                .map_err(|e| e.to_string())
        }
    }

    struct Printer;

    impl Exhaust<i64> for Printer {
        type To = String;
        fn emit(&self, input: i64) -> Self::To {
            format!("={}", input)
        }
    }

    #[tokio::test]
    async fn intake_handle_exhaust() {
        let result: Result<String, ()> = Controller::new(Doubler, Printer)
            .intake(21)
            .handle(|value| async move { Ok(value + 1) })
            .await;
        assert_eq!(result, Ok("=43".to_string()));
    }

    #[tokio::test]
    async fn try_intake_stops_before_handler() {
        let rejected = Controller::<_, _, &'static str, i64, i64>::new(Doubler, Printer)
            .try_intake("twenty");
        assert!(rejected.is_err());

        let result: Result<String, ()> = Controller::new(Doubler, Printer)
            .try_intake("4")
            .unwrap()
            .handle(|value| async move { Ok(value) })
            .await;
        assert_eq!(result, Ok("=8".to_string()));
    }

    #[tokio::test]
    async fn bypass_skips_intake() {
        let result: Result<String, ()> = Controller::new((), Printer)
            .bypass(|| async { Ok(7_i64) })
            .await;
        assert_eq!(result, Ok("=7".to_string()));
    }
}
