//! Sample texts used by the `demo` subcommand

pub const PHISHING_EMAIL: &str = "
    URGENT SECURITY ALERT!

    Dear User,

    Our security team has detected unauthorized access to your account.
    Your account will be SUSPENDED immediately if you don't verify your identity.

    Click here to verify: http://fake-security-update.com/verify-now

    This is an emergency - act ASAP!

    Sincerely,
    Security Team
";

pub const BENIGN_EMAIL: &str = "
    Hi there,

    Just checking in to see how you're doing.
    Let me know if you need anything.

    Best regards,
    John
";

pub const SUSPICIOUS_MESSAGE: &str = "Hi friend! I have a special limited-time offer just for you. \
Free gift if you verify your account now! Click here: bit.ly/special-offer";
