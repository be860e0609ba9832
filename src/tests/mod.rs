mod support;

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::catalog::application::use_cases::create_product::{
    CreateProductInput, CreateProductUseCase, ICreateProductUseCase,
};
use crate::catalog::application::use_cases::list_products::{
    IListProductsUseCase, ListProductsUseCase,
};
use crate::email::application::services::AccountEmailService;
use crate::identity::application::ports::outgoing::TokenProvider;
use crate::identity::application::services::hash::{BcryptHasher, PasswordHashingService};
use crate::identity::application::services::token::{TokenConfig, TokenService};
use crate::identity::application::use_cases::authenticate::{
    AuthenticateError, AuthenticateUseCase, IAuthenticateUseCase, LoginRequest,
};
use crate::identity::application::use_cases::confirm_email::{
    ConfirmEmailUseCase, IConfirmEmailUseCase,
};
use crate::identity::application::use_cases::register_account::{
    IRegisterAccountUseCase, RegisterAccountError, RegisterAccountUseCase, RegisterRequest,
};
use crate::identity::application::use_cases::soft_delete_account::{
    ISoftDeleteAccountUseCase, SoftDeleteAccountUseCase,
};

use support::{FailingEmailSender, InMemoryAccountStore, InMemoryProductStore, RecordingNotifier};

fn hashing() -> PasswordHashingService {
    PasswordHashingService::new(BcryptHasher::fast())
}

fn tokens() -> TokenService {
    TokenService::new(TokenConfig {
        secret_key: "end_to_end_test_key_32_characters!!".to_string(),
        issuer: "commerce-identity".to_string(),
        audience: "commerce-catalog".to_string(),
        token_expiry: 3600,
    })
}

fn register_request(name: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest::new(name.to_string(), email.to_string(), password.to_string()).unwrap()
}

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest::new(email.to_string(), password.to_string()).unwrap()
}

struct Stack {
    accounts: InMemoryAccountStore,
    notifier: Arc<RecordingNotifier>,
    register: RegisterAccountUseCase<InMemoryAccountStore, InMemoryAccountStore>,
    confirm: ConfirmEmailUseCase<InMemoryAccountStore, InMemoryAccountStore>,
    login: AuthenticateUseCase<InMemoryAccountStore>,
    delete: SoftDeleteAccountUseCase<InMemoryAccountStore>,
    token_service: TokenService,
}

fn stack() -> Stack {
    let accounts = InMemoryAccountStore::default();
    let notifier = Arc::new(RecordingNotifier::default());
    let token_service = tokens();

    Stack {
        accounts: accounts.clone(),
        notifier: notifier.clone(),
        register: RegisterAccountUseCase::new(
            accounts.clone(),
            accounts.clone(),
            hashing(),
            token_service.clone(),
            notifier,
        ),
        confirm: ConfirmEmailUseCase::new(accounts.clone(), accounts.clone()),
        login: AuthenticateUseCase::new(accounts.clone(), hashing(), token_service.clone()),
        delete: SoftDeleteAccountUseCase::new(accounts),
        token_service,
    }
}

/// Helper: register + confirm + login, returning (account_id, token).
async fn onboard(stack: &Stack, name: &str, email: &str, password: &str) -> (i32, String) {
    let output = stack
        .register
        .execute(register_request(name, email, password))
        .await
        .expect("registration should succeed");

    let activation = stack.notifier.last_token().expect("email should be sent");
    assert!(stack.confirm.execute(&activation).await.unwrap());

    let session = stack
        .login
        .execute(login_request(email, password))
        .await
        .expect("login should succeed");

    (output.account_id, session.token)
}

#[tokio::test]
async fn register_confirm_authenticate_full_scenario() {
    let stack = stack();

    // Register Ann: account lands in pending state, one notification out.
    let output = stack
        .register
        .execute(register_request("Ann", "ann@x.com", "Pw123!abc"))
        .await
        .expect("registration should succeed");

    assert_eq!(stack.notifier.sent_count(), 1);
    let pending = stack.accounts.snapshot(output.account_id).unwrap();
    assert!(!pending.is_active);
    assert!(pending.activation_token.is_some());

    // Login before confirmation: the password is right, the state is not.
    let early = stack
        .login
        .execute(login_request("ann@x.com", "Pw123!abc"))
        .await;
    assert!(matches!(early, Err(AuthenticateError::AccountNotConfirmed)));

    // Confirm: activates exactly once, second call is a silent no-op.
    let activation = stack.notifier.last_token().unwrap();
    assert!(stack.confirm.execute(&activation).await.unwrap());
    assert!(!stack.confirm.execute(&activation).await.unwrap());

    let active = stack.accounts.snapshot(output.account_id).unwrap();
    assert!(active.is_active);
    assert!(
        active.activation_token.is_none(),
        "token must be cleared on confirmation"
    );

    // Authenticate: token subject equals Ann's id.
    let session = stack
        .login
        .execute(login_request("ann@x.com", "Pw123!abc"))
        .await
        .unwrap();
    let claims = stack
        .token_service
        .verify_identity_token(&session.token)
        .unwrap();
    assert_eq!(claims.sub, output.account_id.to_string());
    assert_eq!(claims.role, "User");

    // Wrong password still rejected after activation.
    let wrong = stack
        .login
        .execute(login_request("ann@x.com", "Pw123!WRONG"))
        .await;
    assert!(matches!(wrong, Err(AuthenticateError::InvalidCredentials)));
}

#[tokio::test]
async fn products_are_invisible_across_accounts() {
    let stack = stack();
    let products = InMemoryProductStore::default();

    let create = CreateProductUseCase::new(products.clone());
    let list = ListProductsUseCase::new(products.clone());

    let (ann_id, _) = onboard(&stack, "Ann", "ann@x.com", "Pw123!abc").await;
    let (bob_id, _) = onboard(&stack, "Bob", "bob@x.com", "Pw123!xyz").await;

    let product = create
        .execute(
            ann_id,
            CreateProductInput {
                name: "Walnut desk".to_string(),
                description: "Solid walnut".to_string(),
                price: Decimal::new(45000, 2),
                is_available: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(product.creator_account_id, ann_id);

    // Ann sees her product; Bob sees an empty catalog.
    let anns = list.execute(ann_id).await.unwrap();
    assert_eq!(anns.len(), 1);

    let bobs = list.execute(bob_id).await.unwrap();
    assert!(bobs.is_empty());
}

#[tokio::test]
async fn soft_deleted_account_frees_its_email() {
    let stack = stack();

    let (ann_id, _) = onboard(&stack, "Ann", "ann@x.com", "Pw123!abc").await;

    stack.delete.execute(ann_id).await.unwrap();
    // Repeat delete stays silent.
    stack.delete.execute(ann_id).await.unwrap();

    // The deleted account can no longer authenticate.
    let login = stack
        .login
        .execute(login_request("ann@x.com", "Pw123!abc"))
        .await;
    assert!(matches!(login, Err(AuthenticateError::InvalidCredentials)));

    // And the email is available for a fresh registration.
    let second = stack
        .register
        .execute(register_request("Ann Again", "ann@x.com", "Pw456!def"))
        .await
        .expect("email should be reusable after soft delete");
    assert_ne!(second.account_id, ann_id);
}

#[tokio::test]
async fn duplicate_registration_rejected_while_account_lives() {
    let stack = stack();

    let (_, _) = onboard(&stack, "Ann", "ann@x.com", "Pw123!abc").await;

    let duplicate = stack
        .register
        .execute(register_request("Imposter", "ann@x.com", "Pw999!zzz"))
        .await;

    assert!(matches!(duplicate, Err(RegisterAccountError::DuplicateEmail)));
    assert_eq!(
        stack.notifier.sent_count(),
        1,
        "the rejected attempt must not email anyone"
    );
}

#[tokio::test]
async fn failed_notification_rolls_back_registration() {
    // Real AccountEmailService over a dead transport.
    let accounts = InMemoryAccountStore::default();
    let notifier = Arc::new(AccountEmailService::new(
        Arc::new(FailingEmailSender),
        "http://localhost:8080".to_string(),
    ));

    let register = RegisterAccountUseCase::new(
        accounts.clone(),
        accounts.clone(),
        hashing(),
        tokens(),
        notifier,
    );

    let result = register
        .execute(register_request("Ann", "ann@x.com", "Pw123!abc"))
        .await;

    assert!(matches!(
        result,
        Err(RegisterAccountError::NotificationError(_))
    ));

    // Nothing was committed: the email is immediately registrable once the
    // sink recovers.
    let recovered = RegisterAccountUseCase::new(
        accounts.clone(),
        accounts,
        hashing(),
        tokens(),
        Arc::new(RecordingNotifier::default()),
    );
    assert!(recovered
        .execute(register_request("Ann", "ann@x.com", "Pw123!abc"))
        .await
        .is_ok());
}
