use super::*;

pub static AR: Content = Content {
    brand: Brand {
        name: "سالم بلعمة",
        tagline: "للتدقيق والاستشارات",
    },
    nav: Nav {
        home: "الرئيسية",
        services: "خدماتنا",
        about: "من نحن",
        expertise: "الخبرات",
        contact: "اتصل بنا",
        cta: "استشارة مجانية",
        quote: "اطلب عرض سعر",
        menu: "القائمة",
    },
    hero: Hero {
        established: "تأسست عام 1998 في أبوظبي",
        title1: "النزاهة في كل",
        title1_highlight: "رقم.",
        title2: "الوضوح في كل",
        title2_highlight: "قرار.",
        desc: "نقدم خدمات تدقيق عالمية المستوى، وخبرة قضائية، وخدمات إعادة هيكلة الشركات. نمكّن الشركات في الإمارات من خلال الشفافية المالية والرؤية الاستراتيجية.",
        btn_service: "خدماتنا",
        btn_about: "عن الشركة",
    },
    stats: &[
        Stat { number: "+25", label: "سنة خبرة" },
        Stat { number: "+500", label: "عميل شركة" },
        Stat { number: "%100", label: "امتثال للقوانين" },
        Stat { number: "+1 مليار", label: "أصول مدققة" },
    ],
    services: Services {
        header: "خبراتنا",
        title: "حلول مالية شاملة",
        desc: "من التدقيق القانوني إلى إعادة هيكلة الشركات المعقدة، نقدم الدقة والامتثال المصمم خصيصًا للسوق الإماراتي.",
        items: &[
            ServiceItem {
                title: "التدقيق والضمان",
                desc: "التدقيق القانوني، التدقيق الداخلي، وخدمات تقييم المخاطر المصممة لتوفير الثقة المطلقة لأصحاب المصلحة.",
            },
            ServiceItem {
                title: "الخبرة القضائية",
                desc: "خبرة مالية معينة من قبل المحكمة، دعم التحكيم، وخدمات حل النزاعات المعترف بها من قبل محاكم الإمارات.",
            },
            ServiceItem {
                title: "إعادة الهيكلة المالية",
                desc: "استراتيجيات التحول للكيانات المتعثرة، بما في ذلك إجراءات الإفلاس وإدارة التصفية.",
            },
            ServiceItem {
                title: "الاستشارات الضريبية",
                desc: "التنقل في المشهد الضريبي المتطور في الإمارات مع تقديم إقرارات ضريبة القيمة المضافة وتخطيط ضرائب الشركات.",
            },
            ServiceItem {
                title: "تأسيس الأعمال",
                desc: "دعم شامل لتأسيس الشركات، دراسات الجدوى، والترخيص في دبي وأبوظبي.",
            },
            ServiceItem {
                title: "مسك الدفاتر والموارد البشرية",
                desc: "المحاسبة الخارجية، إدارة الرواتب، وخدمات المدير المالي لتبسيط عملياتك اليومية.",
            },
        ],
        learn_more: "المزيد",
        estimate_tax: "احسب ضريبة الشركات",
    },
    about: About {
        title: "إرث من القيادة المالية",
        intro: "تأسس مكتب سالم بالعمى لتدقيق الحسابات في عام 1998، ونما ليصبح واحدًا من المؤسسات المالية الأكثر احترامًا في الإمارات.",
        desc: "تحت قيادة السيد محمد سالم بالعمى، رئيس لجان الأمناء المعينين من المحكمة، نتخصص في إعادة الهيكلة المالية والاستشارات المعقدة. كان لمكتبنا دور محوري في إعادة هيكلة كيانات كبرى مثل مجموعة KBBO، مما يثبت قدرتنا على التعامل مع المشهد المالي المعقد بنزاهة.",
        quote1: "الثقة هي",
        quote2: "أكبر أصولنا.",
        chairman_name: "السيد سالم بلعمة التميمي",
        role: "الرئيس والمدير",
        expertise_title: "لماذا يختارنا عملاؤنا",
        points: &[
            "عمليات معتمدة من ISO",
            "معتمدون من وزارة العدل الإماراتية",
            "خبراء في قانون الإفلاس الإماراتي",
            "فريق متعدد اللغات (العربية والإنجليزية)",
        ],
    },
    team: Team {
        header: "فريقنا",
        title: "تعرّف على الشركاء",
        desc: "مدققون ذوو خبرة وخبراء معينون من المحاكم ومستشارون ضريبيون يعملون جنبًا إلى جنب في كل مهمة.",
        view_profile: "عرض الملف",
        back: "العودة إلى الفريق",
        expertise_title: "مجالات الخبرة",
        members: &[
            TeamMember {
                id: "salem",
                name: "سالم بلعمة التميمي",
                role: "الرئيس والمدير",
                image: "/salempic.png",
                bio: "أسس سالم المكتب عام 1998، وقاد أعمال التدقيق القانوني والمراجعات المكلفة من المحاكم للمجموعات العائلية والشركات المدرجة والجهات الحكومية في الإمارات لأكثر من خمسة وعشرين عامًا.",
                expertise: &[
                    "التدقيق القانوني",
                    "الخبرة المعينة من المحكمة",
                    "حوكمة الشركات",
                ],
            },
            TeamMember {
                id: "mohammed",
                name: "محمد سالم بلعمة",
                role: "الشريك المدير، إعادة الهيكلة",
                image: "/team/mohammed.png",
                bio: "يرأس محمد لجان الأمناء المعينين من المحكمة، وقاد عمل المكتب في إعادة هيكلة مجموعة KBBO. يقدم المشورة للدائنين ومجالس الإدارة خلال إجراءات الإفلاس والتصفية.",
                expertise: &[
                    "قانون الإفلاس الإماراتي",
                    "لجان الأمناء",
                    "إدارة التصفية",
                ],
            },
            TeamMember {
                id: "rana",
                name: "رنا الحداد",
                role: "رئيسة قسم الضرائب وضريبة القيمة المضافة",
                image: "/team/rana.png",
                bio: "تقود رنا قسم الضرائب، وترشد العملاء في تسجيل ضريبة القيمة المضافة والاستعداد لضريبة الشركات وتدقيقات الهيئة الاتحادية للضرائب.",
                expertise: &[
                    "تخطيط ضريبة الشركات",
                    "الامتثال لضريبة القيمة المضافة",
                    "تدقيقات الهيئة الضريبية",
                ],
            },
            TeamMember {
                id: "omar",
                name: "عمر خليل",
                role: "شريك التدقيق",
                image: "/team/omar.png",
                bio: "يدير عمر فريق الضمان ويشرف على مهام التدقيق الداخلي وتقييم المخاطر للشركات المتوسطة في دبي وأبوظبي.",
                expertise: &[
                    "التدقيق الداخلي",
                    "تقييم المخاطر",
                    "التقارير وفق المعايير الدولية",
                ],
            },
        ],
    },
    tax: TaxText {
        header: "ضريبة الشركات في الإمارات",
        title: "حاسبة ضريبة الشركات",
        desc: "أدخل صافي ربحك السنوي لمعرفة كيفية تطبيق ضريبة الشركات الإماراتية على أعمالك.",
        rule_exempt: "الأرباح حتى الحد المعفى تخضع لنسبة 0%",
        rule_taxable: "الأرباح التي تتجاوز الحد تخضع لنسبة",
        input_label: "صافي الربح السنوي (درهم)",
        placeholder: "مثال: 500,000",
        calculate: "احسب",
        result_title: "التقدير الخاص بك",
        total_profit: "إجمالي الربح",
        exempt_amount: "المبلغ المعفى",
        taxable_amount: "المبلغ الخاضع للضريبة",
        tax_due: "ضريبة الشركات المستحقة",
        empty_hint: "أدخل المبلغ ثم اضغط احسب.",
        disclaimer: "هذا التقدير للاسترشاد فقط ولا يأخذ في الاعتبار الإعفاءات أو الحوافز أو وضع المنطقة الحرة. تواصل معنا لتقييم شامل.",
        back: "العودة إلى الخدمات",
    },
    contact: Contact {
        title: "دعنا نناقش مستقبلك المالي",
        desc: "سواء كنت بحاجة إلى تدقيق قانوني، أو مشورة ضريبية، أو دعم معقد لإعادة الهيكلة، خبراؤنا مستعدون للمساعدة.",
        labels: ContactLabels {
            head_office: "المكتب الرئيسي",
            phone: "الهاتف",
            email: "البريد الإلكتروني",
            form_title: "اطلب اتصالاً",
            first_name: "الاسم الأول",
            last_name: "اسم العائلة",
            company: "اسم الشركة",
            service: "الخدمة المطلوبة",
            message: "الرسالة",
            submit: "إرسال الطلب",
        },
        placeholders: ContactPlaceholders {
            first_name: "الإسم الأول",
            last_name: "إسم العائلة",
            company: "شركتك ذ.م.م",
            message: "كيف يمكننا مساعدتك؟",
        },
        options: &[
            "التدقيق والضمان",
            "الاستشارات الضريبية وضريبة القيمة المضافة",
            "الخبرة القضائية",
            "إعادة هيكلة الأعمال",
            "أخرى",
        ],
        mail_subject: "طلب اتصال",
    },
    footer: Footer {
        rights: "سالم بلعمة لتدقيق الحسابات. جميع الحقوق محفوظة.",
        tagline: "صمم للتميز في الإمارات.",
    },
};
